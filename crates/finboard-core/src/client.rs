//! Finance service client.
//!
//! Every operation is a single GET against the configured base URL. There is
//! no retry and no caching; the caller decides what to do with a failure.
//!
//! # Endpoints
//!
//! | Operation | Endpoint | Query | Response |
//! |-----------|----------|-------|----------|
//! | [`FinanceClient::get_market`] | `/finance/market` | `symbol` | [`MarketSeriesResponse`] |
//! | [`FinanceClient::get_forecast`] | `/finance/forecast` | `symbol` | [`ForecastSeriesResponse`] |
//! | [`FinanceClient::get_kpis`] | `/finance/kpis` | `symbol` | [`KpiResponse`] |
//! | [`FinanceClient::search_symbols`] | `/finance/search` | `q` | [`SearchResponse`] |
//! | [`FinanceClient::get_kpi_insight`] | `/finance/kpi-insight` | `symbol`, `kpi`, `value` | [`InsightResponse`] |

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DashboardConfig;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{FinanceError, ForecastPoint, KpiSet, MarketPoint, SearchResult, Symbol};

/// Connect/read budget applied to every request.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const MARKET_ENDPOINT: &str = "/finance/market";
const FORECAST_ENDPOINT: &str = "/finance/forecast";
const KPIS_ENDPOINT: &str = "/finance/kpis";
const SEARCH_ENDPOINT: &str = "/finance/search";
const INSIGHT_ENDPOINT: &str = "/finance/kpi-insight";

/// Raw `/finance/market` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSeriesResponse {
    pub data: MarketSeries,
}

/// Provider time series keyed by date, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSeries {
    #[serde(rename = "4. close")]
    pub close: Map<String, Value>,
}

impl MarketSeriesResponse {
    /// Flatten the keyed close series into points, keeping key order.
    ///
    /// Prices arrive as text; anything that is not a number becomes `NaN`.
    pub fn into_points(self) -> Vec<MarketPoint> {
        self.data
            .close
            .into_iter()
            .map(|(date, price)| MarketPoint::new(date, coerce_price(&price)))
            .collect()
    }
}

fn coerce_price(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Null => 0.0,
        _ => f64::NAN,
    }
}

/// Raw `/finance/forecast` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeriesResponse {
    pub forecast: Vec<ForecastPoint>,
}

/// Raw `/finance/kpis` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiResponse {
    pub kpis: KpiSet,
}

/// Raw `/finance/search` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// Raw `/finance/kpi-insight` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResponse {
    pub insight: String,
}

/// Read-only client for the finance service.
#[derive(Clone)]
pub struct FinanceClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl FinanceClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn from_config(http: Arc<dyn HttpClient>, config: &DashboardConfig) -> Self {
        Self::new(http, config.api_base_url.clone())
    }

    pub async fn get_market(
        &self,
        symbol: Option<&Symbol>,
    ) -> Result<MarketSeriesResponse, FinanceError> {
        let request =
            self.request(MARKET_ENDPOINT).with_query("symbol", symbol.map(Symbol::as_str));
        self.get_json(MARKET_ENDPOINT, request).await
    }

    pub async fn get_forecast(
        &self,
        symbol: Option<&Symbol>,
    ) -> Result<ForecastSeriesResponse, FinanceError> {
        let request =
            self.request(FORECAST_ENDPOINT).with_query("symbol", symbol.map(Symbol::as_str));
        self.get_json(FORECAST_ENDPOINT, request).await
    }

    pub async fn get_kpis(&self, symbol: Option<&Symbol>) -> Result<KpiResponse, FinanceError> {
        let request = self.request(KPIS_ENDPOINT).with_query("symbol", symbol.map(Symbol::as_str));
        self.get_json(KPIS_ENDPOINT, request).await
    }

    pub async fn search_symbols(&self, query: &str) -> Result<SearchResponse, FinanceError> {
        let request = self.request(SEARCH_ENDPOINT).with_query("q", Some(query));
        self.get_json(SEARCH_ENDPOINT, request).await
    }

    /// Ask the service to explain one KPI value. `value` is the text the
    /// card displays (e.g. `$155` or `1.2%`).
    pub async fn get_kpi_insight(
        &self,
        symbol: &Symbol,
        kpi: &str,
        value: &str,
    ) -> Result<InsightResponse, FinanceError> {
        let request = self
            .request(INSIGHT_ENDPOINT)
            .with_query("symbol", Some(symbol.as_str()))
            .with_query("kpi", Some(kpi))
            .with_query("value", Some(value));
        self.get_json(INSIGHT_ENDPOINT, request).await
    }

    fn request(&self, endpoint: &'static str) -> HttpRequest {
        HttpRequest::get(&self.base_url, endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms)
    }

    async fn get_json<T>(
        &self,
        endpoint: &'static str,
        request: HttpRequest,
    ) -> Result<T, FinanceError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(endpoint, url = %request.url(), "finance request");

        let response = self.http.execute(request).await?;
        if !response.is_success() {
            return Err(FinanceError::Status {
                endpoint,
                status: response.status,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|source| FinanceError::Decode { endpoint, source })
    }
}
