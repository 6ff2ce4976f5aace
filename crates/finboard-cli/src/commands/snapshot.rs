use std::process::ExitCode;

use finboard_dashboard::DashboardPage;

use crate::cli::{Cli, SymbolArgs};
use crate::error::CliError;
use crate::output;

use super::{finance_client, load_config};

/// One load, one page. A failed load surfaces as a finance error (exit 3).
pub async fn run(cli: &Cli, args: &SymbolArgs) -> Result<ExitCode, CliError> {
    let config = load_config(cli, args.symbol.as_deref())?;
    let page = DashboardPage::new(
        finance_client(&config),
        config.default_symbol.clone(),
        config.refresh_interval,
    );

    page.controller().refresh().await?;

    output::render(
        &page.controller().snapshot(),
        &page.render(),
        cli.format,
        cli.pretty,
    )?;
    Ok(ExitCode::SUCCESS)
}
