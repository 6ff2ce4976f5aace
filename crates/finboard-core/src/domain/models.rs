use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Closing price for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPoint {
    /// `YYYY-MM-DD` as delivered by the upstream series.
    pub date: String,
    pub close: f64,
}

impl MarketPoint {
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        Self {
            date: date.into(),
            close,
        }
    }
}

/// Forecast value with its confidence band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "ds")]
    pub date: String,
    #[serde(rename = "yhat")]
    pub predicted: f64,
    #[serde(rename = "yhat_upper")]
    pub upper_bound: f64,
    #[serde(rename = "yhat_lower")]
    pub lower_bound: f64,
}

/// Categorical trend flag of a [`KpiSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
}

impl Trend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
        }
    }
}

impl Display for Trend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key performance indicators computed for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    pub last_price: f64,
    pub daily_return_pct: f64,
    pub volatility_pct: f64,
    pub ma_20: f64,
    pub ma_50: f64,
    pub rsi_14: f64,
    pub max_drawdown_pct: f64,
    pub trend: Trend,
}

/// One hit of a symbol search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Ticker as the service spells it. Validated only when selected.
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub currency: String,
}
