//! # Domain Models
//!
//! Types shared by the finance client and the dashboard widgets.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker symbol |
//! | [`MarketPoint`] | Closing price for one date |
//! | [`ForecastPoint`] | Predicted value with upper/lower band |
//! | [`KpiSet`] | Fixed record of indicators plus [`Trend`] |
//! | [`SearchResult`] | One symbol search hit |

mod models;
mod symbol;

pub use models::{ForecastPoint, KpiSet, MarketPoint, SearchResult, Trend};
pub use symbol::Symbol;
