//! CLI error types and exit codes

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Import rejected by server: {0}")]
    Rejected(String),

    #[error("Import interrupted")]
    Interrupted,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl CliError {
    /// Get the exit code for this error
    ///
    /// The contract with calling scripts is deliberately flat: 0 is a clean
    /// run, 1 is everything else (usage error, malformed input, interrupt,
    /// or any failure that escapes the per-batch recovery).
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::ConnectionFailed(_) => {
                Some("Check the base URL and your network connection, then try again.")
            }
            CliError::Api { status: 401, .. } | CliError::Api { status: 403, .. } => {
                Some("Verify the API key and admin username (Admin -> API -> New API Key).")
            }
            CliError::Validation(_) => {
                Some("The input file must contain a top-level JSON array of journal records.")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Network("Request timed out".to_string())
        } else {
            CliError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e.to_string())
    }
}
