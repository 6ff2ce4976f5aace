use std::process::ExitCode;

use finboard_core::Symbol;

use crate::cli::{Cli, InsightArgs};
use crate::error::CliError;
use crate::output;

use super::{finance_client, load_config};

pub async fn run(cli: &Cli, args: &InsightArgs) -> Result<ExitCode, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let config = load_config(cli, None)?;
    let client = finance_client(&config);

    let response = client
        .get_kpi_insight(&symbol, &args.kpi, &args.value)
        .await?;

    output::render(&response, &response.insight, cli.format, cli.pretty)?;
    Ok(ExitCode::SUCCESS)
}
