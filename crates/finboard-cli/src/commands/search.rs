use std::process::ExitCode;

use crate::cli::{Cli, SearchArgs};
use crate::error::CliError;
use crate::output;

use super::{finance_client, load_config};

pub async fn run(cli: &Cli, args: &SearchArgs) -> Result<ExitCode, CliError> {
    let config = load_config(cli, None)?;
    let client = finance_client(&config);

    let response = client.search_symbols(args.query.trim()).await?;
    tracing::info!(query = %args.query, count = response.results.len(), "search finished");

    let text = if response.results.is_empty() {
        String::from("no results")
    } else {
        response
            .results
            .iter()
            .map(|result| format!("{} – {} ({})", result.symbol, result.name, result.region))
            .collect::<Vec<_>>()
            .join("\n")
    };

    output::render(&response, &text, cli.format, cli.pretty)?;
    Ok(ExitCode::SUCCESS)
}
