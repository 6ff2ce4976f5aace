//! # Finboard Core
//!
//! Core contracts and domain types for the finboard dashboard.
//!
//! ## Overview
//!
//! This crate provides everything the dashboard needs below the widget layer:
//!
//! - **Domain models** for market series, forecasts, KPIs and search results
//! - **HTTP transport seam** so the finance service can be faked in tests
//! - **Finance client** issuing the five read-only dashboard queries
//! - **Date formatting** shared by chart axes and tooltips
//! - **Configuration** loaded once at process entry
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Finance service client and response types |
//! | [`config`] | Dashboard configuration from the environment |
//! | [`date`] | `YYYY-MM-DD` formatting of date-like values |
//! | [`domain`] | Domain models (Symbol, MarketPoint, KpiSet, ...) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use finboard_core::{FinanceClient, ReqwestHttpClient, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = Arc::new(ReqwestHttpClient::new());
//!     let client = FinanceClient::new(http, "http://localhost:8000");
//!
//!     let symbol = Symbol::parse("AAPL")?;
//!     let kpis = client.get_kpis(Some(&symbol)).await?;
//!     println!("last price: ${}", kpis.kpis.last_price);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Client calls return [`FinanceError`]. Transport failures are passed
//! through untouched so the caller sees exactly what the transport reported:
//!
//! ```rust
//! use finboard_core::{FinanceError, HttpError};
//!
//! let error = FinanceError::from(HttpError::new("Network error"));
//! assert_eq!(error.to_string(), "Network error");
//! ```

pub mod client;
pub mod config;
pub mod date;
pub mod domain;
pub mod error;
pub mod http_client;

pub use client::{
    FinanceClient, ForecastSeriesResponse, InsightResponse, KpiResponse, MarketSeries,
    MarketSeriesResponse, SearchResponse, DEFAULT_TIMEOUT_MS,
};
pub use config::{DashboardConfig, DEFAULT_REFRESH_INTERVAL};
pub use date::{format_date, DateInput, INVALID_DATE};
pub use domain::{ForecastPoint, KpiSet, MarketPoint, SearchResult, Symbol, Trend};
pub use error::{ConfigError, FinanceError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
