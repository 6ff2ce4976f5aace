mod insight;
mod search;
mod snapshot;
mod watch;

use std::process::ExitCode;
use std::sync::Arc;

use finboard_core::config::{API_URL_VAR, DEFAULT_SYMBOL_VAR, REFRESH_MS_VAR};
use finboard_core::{DashboardConfig, FinanceClient, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    match &cli.command {
        Command::Watch(args) => watch::run(cli, args).await,
        Command::Snapshot(args) => snapshot::run(cli, args).await,
        Command::Search(args) => search::run(cli, args).await,
        Command::Insight(args) => insight::run(cli, args).await,
    }
}

/// Environment (and `.env`) with command-line flags taking precedence.
fn load_config(cli: &Cli, symbol: Option<&str>) -> Result<DashboardConfig, CliError> {
    let config = DashboardConfig::from_env_with(|name| match name {
        API_URL_VAR => cli.api_url.clone(),
        REFRESH_MS_VAR => cli.refresh_ms.clone(),
        DEFAULT_SYMBOL_VAR => symbol.map(str::to_owned),
        _ => None,
    })?;

    tracing::debug!(
        api_url = %config.api_base_url,
        symbol = ?config.default_symbol,
        refresh_ms = config.refresh_interval.as_millis() as u64,
        "configuration loaded"
    );
    Ok(config)
}

fn finance_client(config: &DashboardConfig) -> FinanceClient {
    FinanceClient::from_config(Arc::new(ReqwestHttpClient::new()), config)
}
