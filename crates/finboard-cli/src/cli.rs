//! CLI argument definitions for finboard.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `watch` | Live dashboard driven from stdin |
//! | `snapshot` | Load once, print the dashboard, exit |
//! | `search` | Look up symbols |
//! | `insight` | Explain one KPI value |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--api-url` | `FINBOARD_API_URL` | Finance service base URL |
//! | `--refresh-ms` | `FINBOARD_REFRESH_MS` or `300000` | Refresh interval |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// 📊 finboard - terminal financial dashboard
///
/// Market history, forecast and KPIs for one symbol, refreshed on a timer.
#[derive(Debug, Parser)]
#[command(name = "finboard", author, version, about = "Terminal financial dashboard")]
pub struct Cli {
    /// Finance service base URL (overrides FINBOARD_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Refresh interval in milliseconds (overrides FINBOARD_REFRESH_MS).
    #[arg(long, global = true)]
    pub refresh_ms: Option<String>,

    /// Output format for `snapshot`, `search` and `insight`.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered text for terminal display.
    Text,
    /// Single JSON document.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📈 Run the live dashboard.
    ///
    /// The page is printed after every load. Each stdin line is an action:
    ///
    ///   text   type `text` into the search box
    ///   :N     select search result N
    ///   ?N     show the insight of KPI card N
    ///   q      quit
    ///
    /// # Examples
    ///
    ///   finboard watch --symbol AAPL
    Watch(SymbolArgs),

    /// 🖨️ Load once and print the dashboard.
    ///
    /// Exits with code 3 when the load fails.
    ///
    /// # Examples
    ///
    ///   finboard snapshot --symbol MSFT
    ///   finboard snapshot --format json --pretty
    Snapshot(SymbolArgs),

    /// 🔍 Search for symbols.
    ///
    /// # Examples
    ///
    ///   finboard search tesla
    Search(SearchArgs),

    /// 💡 Ask for an explanation of one KPI value.
    ///
    /// # Examples
    ///
    ///   finboard insight AAPL "Last Price" '$155'
    Insight(InsightArgs),
}

/// Symbol selection shared by `watch` and `snapshot`.
#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Symbol to show (overrides FINBOARD_DEFAULT_SYMBOL).
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form query (symbol or company name).
    pub query: String,
}

/// Arguments for the `insight` command.
#[derive(Debug, Args)]
pub struct InsightArgs {
    /// Market symbol.
    pub symbol: String,

    /// KPI title, e.g. "Last Price".
    pub kpi: String,

    /// Displayed KPI value, e.g. "$155".
    pub value: String,
}
