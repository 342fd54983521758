//! journals-import - bulk-load journal records into a Discourse forum
//!
//! Splits a JSON array of journal records into fixed-size batches, POSTs
//! each batch to the discourse-journals admin API, pauses between batches,
//! and prints an aggregate summary at the end.

use clap::Parser;
use journals_import::commands;
use journals_import::error::CliResult;

/// Bulk-import journal records via the discourse-journals admin API
#[derive(Parser)]
#[command(name = "journals-import")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: commands::import::ImportArgs,
}

#[tokio::main]
async fn main() {
    // Exit code 1 for usage errors, matching every other failure path.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    commands::import::execute(cli.args).await
}
