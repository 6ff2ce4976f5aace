//! Scripted transport shared by the behavior suites.
#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use finboard_core::{FinanceClient, HttpClient, HttpError, HttpRequest, HttpResponse};

pub const BASE_URL: &str = "http://finance.test";

pub const MARKET_JSON: &str = r#"{
    "data": {
        "4. close": {
            "2024-01-01": "150",
            "2024-01-02": "155"
        }
    }
}"#;

pub const FORECAST_JSON: &str = r#"{
    "forecast": [
        { "ds": "2024-01-03", "yhat": 160, "yhat_upper": 170, "yhat_lower": 150 }
    ]
}"#;

pub const KPIS_JSON: &str = r#"{
    "kpis": {
        "last_price": 155,
        "daily_return_pct": 1.2,
        "volatility_pct": 2.5,
        "ma_20": 150,
        "ma_50": 145,
        "rsi_14": 60,
        "max_drawdown_pct": -5,
        "trend": "bullish"
    }
}"#;

pub const SEARCH_JSON: &str = r#"{
    "results": [
        { "symbol": "TSLA", "name": "Tesla Inc", "region": "United States", "currency": "USD" },
        { "symbol": "TSM", "name": "Taiwan Semiconductor", "region": "United States", "currency": "USD" }
    ]
}"#;

struct Rule {
    path: String,
    symbol: Option<String>,
    response: Result<HttpResponse, HttpError>,
    delay: Duration,
}

impl Rule {
    fn matches(&self, request: &HttpRequest) -> bool {
        if self.path != request.path {
            return false;
        }
        match &self.symbol {
            Some(symbol) => request.query_value("symbol") == Some(Some(symbol.as_str())),
            None => true,
        }
    }
}

/// Transport answering from scripted rules and recording every request.
///
/// The most recently added matching rule wins.
#[derive(Default)]
pub struct ScriptedHttpClient {
    rules: Mutex<Vec<Rule>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Client already scripted with the three dashboard endpoints.
    pub fn dashboard() -> Arc<Self> {
        let http = Self::new();
        http.respond("/finance/market", MARKET_JSON);
        http.respond("/finance/forecast", FORECAST_JSON);
        http.respond("/finance/kpis", KPIS_JSON);
        http
    }

    pub fn respond(&self, path: &str, body: &str) {
        self.push(path, None, Ok(HttpResponse::ok_json(body)), Duration::ZERO);
    }

    pub fn respond_for(&self, path: &str, symbol: &str, body: &str, delay: Duration) {
        self.push(
            path,
            Some(symbol),
            Ok(HttpResponse::ok_json(body)),
            delay,
        );
    }

    pub fn respond_after(&self, path: &str, body: &str, delay: Duration) {
        self.push(path, None, Ok(HttpResponse::ok_json(body)), delay);
    }

    pub fn respond_status(&self, path: &str, status: u16) {
        self.push(
            path,
            None,
            Ok(HttpResponse::with_status(status, "{}")),
            Duration::ZERO,
        );
    }

    pub fn fail(&self, path: &str, message: &str) {
        self.push(path, None, Err(HttpError::new(message)), Duration::ZERO);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }

    pub fn count(&self, path: &str) -> usize {
        self.requests_to(path).len()
    }

    fn push(
        &self,
        path: &str,
        symbol: Option<&str>,
        response: Result<HttpResponse, HttpError>,
        delay: Duration,
    ) {
        self.rules
            .lock()
            .expect("rule store should not be poisoned")
            .push(Rule {
                path: path.to_owned(),
                symbol: symbol.map(str::to_owned),
                response,
                delay,
            });
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let (response, delay) = {
            let rules = self.rules.lock().expect("rule store should not be poisoned");
            rules
                .iter()
                .rev()
                .find(|rule| rule.matches(&request))
                .map(|rule| (rule.response.clone(), rule.delay))
                .unwrap_or_else(|| {
                    (
                        Err(HttpError::new(format!("no route for {}", request.path))),
                        Duration::ZERO,
                    )
                })
        };

        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            response
        })
    }
}

pub fn finance_client(http: &Arc<ScriptedHttpClient>) -> FinanceClient {
    FinanceClient::new(http.clone(), BASE_URL)
}
