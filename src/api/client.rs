//! HTTP client wrapper for the discourse-journals API

use crate::error::{CliError, CliResult};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Timeout for one batch-import call. Server-side creation of a full batch
/// can take minutes on a cold forum, so this is generous.
const BATCH_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for a single-record lookup.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome counts reported by the server for one imported batch
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchOutcome {
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub skipped: u64,
    /// Per-record error messages (e.g. validation failures the server
    /// tolerated without failing the whole batch)
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Response envelope returned by the batch endpoint
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    success: bool,
    results: Option<BatchOutcome>,
    message: Option<String>,
}

/// Error body some endpoints return alongside a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// API client for making authenticated requests
///
/// Holds one reusable `reqwest::Client` configured with the static
/// credential headers Discourse expects on admin API calls. Construction
/// performs no network activity.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Trailing slashes are stripped from `base_url` so endpoint paths can
    /// be appended uniformly.
    pub fn new(base_url: &str, api_key: &str, username: &str) -> CliResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Api-Key", parse_header_value("api key", api_key)?);
        headers.insert("Api-Username", parse_header_value("username", username)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the configured base URL (trailing slash already stripped)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Import one batch of journal records
    ///
    /// Sends `{"journals": [...]}` to the batch endpoint and returns the
    /// server's outcome counts. Transport failures, non-2xx statuses, and
    /// `success: false` envelopes all surface as errors; the caller decides
    /// how to recover.
    pub async fn import_batch(&self, journals: &[Value]) -> CliResult<BatchOutcome> {
        let url = format!("{}/discourse-journals/api/journals/batch", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(BATCH_TIMEOUT)
            .json(&serde_json::json!({ "journals": journals }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Api {
                status: status.as_u16(),
                message: error_message(response, status).await,
            });
        }

        let envelope: ApiEnvelope = response.json().await.map_err(CliError::from)?;
        if !envelope.success {
            return Err(CliError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        envelope.results.ok_or_else(|| {
            CliError::Rejected("Server reported success but returned no results".to_string())
        })
    }

    /// Look up a single journal record by ISSN
    pub async fn get_journal(&self, issn: &str) -> CliResult<Value> {
        let url = format!("{}/discourse-journals/api/journals/{issn}", self.base_url);

        let response = self.client.get(&url).timeout(LOOKUP_TIMEOUT).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Api {
                status: status.as_u16(),
                message: error_message(response, status).await,
            });
        }

        response.json().await.map_err(CliError::from)
    }
}

/// Pull a human-readable message out of an error response, falling back to
/// the status line when the body is absent or not the expected shape.
async fn error_message(response: reqwest::Response, status: reqwest::StatusCode) -> String {
    let fallback = status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string();

    match response.json::<ErrorBody>().await {
        Ok(ErrorBody { message: Some(m) }) => m,
        _ => fallback,
    }
}

fn parse_header_value(name: &str, value: &str) -> CliResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| CliError::Validation(format!("Invalid {name}: not a valid header value")))
}
