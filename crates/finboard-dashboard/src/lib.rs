//! Dashboard widgets and refresh coordination for finboard.
//!
//! Widgets are plain owned state with an explicit lifecycle: `mount`
//! starts whatever timers a widget needs, `unmount` (or drop) cancels them.
//! Rendering produces text; nothing here knows about a terminal.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chart`] | Market and forecast charts |
//! | [`controller`] | Active symbol, parallel loads, refresh interval |
//! | [`kpi_card`] | KPI card with on-demand insight |
//! | [`kpi_grid`] | The eight KPI cards of a [`finboard_core::KpiSet`] |
//! | [`page`] | Composition of all widgets |
//! | [`search`] | Debounced symbol search |
//!
//! Every spawned task requires a running tokio runtime.

pub mod chart;
pub mod controller;
pub mod kpi_card;
pub mod kpi_grid;
pub mod page;
pub mod search;

mod sync;

pub use chart::{ForecastChart, MarketChart, FORECAST_CHART_TITLE, MARKET_CHART_TITLE};
pub use controller::{DashboardController, DashboardEvent, DashboardSnapshot, LoadOutcome};
pub use kpi_card::{CardView, KpiCard, INSIGHT_FALLBACK, INSIGHT_LOADING};
pub use kpi_grid::{format_kpis, KpiGrid, KPI_TITLES};
pub use page::{DashboardPage, DASHBOARD_TITLE};
pub use search::{
    SelectionCallback, SymbolSearch, MIN_QUERY_LEN, SEARCH_DEBOUNCE, SEARCH_LOADING,
    SEARCH_PLACEHOLDER,
};
