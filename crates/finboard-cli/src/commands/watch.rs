use std::process::ExitCode;
use std::time::Duration;

use finboard_dashboard::{DashboardEvent, DashboardPage};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use crate::cli::{Cli, SymbolArgs};
use crate::error::CliError;
use crate::output;

use super::{finance_client, load_config};

/// Search results and insights arrive without an event; poll for changes.
const REPAINT_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Query(String),
    Select(usize),
    Hover(usize),
    Leave,
    Quit,
}

impl Action {
    /// `:N` and `?N` are 1-based on screen and 0-based here.
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == "q" {
            return Self::Quit;
        }
        if trimmed == "?" {
            return Self::Leave;
        }
        if let Some(index) = trimmed.strip_prefix(':').and_then(one_based) {
            return Self::Select(index);
        }
        if let Some(index) = trimmed.strip_prefix('?').and_then(one_based) {
            return Self::Hover(index);
        }
        Self::Query(trimmed.to_owned())
    }
}

fn one_based(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()?.checked_sub(1)
}

pub async fn run(cli: &Cli, args: &SymbolArgs) -> Result<ExitCode, CliError> {
    let config = load_config(cli, args.symbol.as_deref())?;
    let page = DashboardPage::from_config(finance_client(&config), &config);
    let mut events = page.controller().subscribe();
    tracing::info!(
        symbol = ?config.default_symbol,
        refresh_ms = config.refresh_interval.as_millis() as u64,
        "dashboard started"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut repaint = tokio::time::interval(REPAINT_POLL);
    let mut shown = String::new();
    let mut hovered: Option<usize> = None;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(DashboardEvent::LoadFailed { symbol, message }) => {
                    tracing::warn!(symbol = ?symbol, %message, "keeping previous data");
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "dashboard events skipped");
                }
                Err(RecvError::Closed) => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Action::parse(&line) {
                    Action::Quit => break,
                    Action::Query(text) => page.search().set_query(text),
                    Action::Select(index) => {
                        if page.search().select(index).is_none() {
                            tracing::warn!(index = index + 1, "no such search result");
                        }
                    }
                    Action::Hover(index) => {
                        if let Some(previous) = hovered.take() {
                            page.leave_kpi(previous);
                        }
                        page.hover_kpi(index);
                        hovered = Some(index);
                    }
                    Action::Leave => {
                        if let Some(previous) = hovered.take() {
                            page.leave_kpi(previous);
                        }
                    }
                }
            },
            _ = repaint.tick() => {}
            _ = &mut ctrl_c => break,
        }

        let current = page.render();
        if current != shown {
            output::repaint(&current)?;
            shown = current;
        }
    }

    page.unmount();
    tracing::info!("dashboard stopped");
    Ok(ExitCode::SUCCESS)
}
