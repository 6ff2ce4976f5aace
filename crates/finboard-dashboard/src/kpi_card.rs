//! KPI card with an insight tooltip loaded on first hover.

use std::sync::{Arc, Mutex};

use finboard_core::{FinanceClient, Symbol};
use tokio::task::JoinHandle;

use crate::sync::lock;

/// Shown (and cached) when the insight request fails.
pub const INSIGHT_FALLBACK: &str = "AI insight unavailable.";
/// Tooltip text while the insight request is in flight.
pub const INSIGHT_LOADING: &str = "Analyzing...";

#[derive(Debug, Clone, PartialEq, Eq)]
struct InsightKey {
    symbol: Option<Symbol>,
    value: String,
}

#[derive(Debug, Default)]
struct CardState {
    symbol: Option<Symbol>,
    value: String,
    insight: Option<(InsightKey, String)>,
    loading: bool,
    tooltip_visible: bool,
}

impl CardState {
    fn key(&self) -> InsightKey {
        InsightKey {
            symbol: self.symbol.clone(),
            value: self.value.clone(),
        }
    }

    fn cached_insight(&self) -> Option<&str> {
        let key = self.key();
        self.insight
            .as_ref()
            .filter(|(cached, _)| *cached == key)
            .map(|(_, text)| text.as_str())
    }
}

/// What a card displays right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub value: String,
    /// `Some` while the pointer is over the card.
    pub tooltip: Option<String>,
}

/// One KPI with title and display value.
///
/// Cloning yields another handle to the same card.
#[derive(Clone)]
pub struct KpiCard {
    title: String,
    client: FinanceClient,
    state: Arc<Mutex<CardState>>,
}

impl KpiCard {
    pub fn new(
        client: FinanceClient,
        title: impl Into<String>,
        value: impl Into<String>,
        symbol: Option<Symbol>,
    ) -> Self {
        Self {
            title: title.into(),
            client,
            state: Arc::new(Mutex::new(CardState {
                symbol,
                value: value.into(),
                ..CardState::default()
            })),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> String {
        lock(&self.state).value.clone()
    }

    /// Replace the displayed value and symbol. A cached insight only
    /// applies to the symbol/value it was fetched for.
    pub fn update(&self, value: impl Into<String>, symbol: Option<Symbol>) {
        let mut state = lock(&self.state);
        state.value = value.into();
        state.symbol = symbol;
    }

    /// Show the tooltip and start loading the insight unless it is cached
    /// or already loading. Returns the spawned request, if any.
    pub fn pointer_enter(&self) -> Option<JoinHandle<()>> {
        let mut state = lock(&self.state);
        state.tooltip_visible = true;

        if state.loading || state.cached_insight().is_some() {
            return None;
        }

        let key = state.key();
        let Some(symbol) = key.symbol.clone() else {
            state.insight = Some((key, String::from(INSIGHT_FALLBACK)));
            return None;
        };
        state.loading = true;
        drop(state);

        let client = self.client.clone();
        let title = self.title.clone();
        let shared = Arc::clone(&self.state);

        Some(tokio::spawn(async move {
            let text = match client.get_kpi_insight(&symbol, &title, &key.value).await {
                Ok(response) => response.insight,
                Err(error) => {
                    tracing::warn!(%symbol, kpi = %title, %error, "kpi insight failed");
                    String::from(INSIGHT_FALLBACK)
                }
            };

            let mut state = lock(&shared);
            state.insight = Some((key, text));
            state.loading = false;
        }))
    }

    /// Hide the tooltip. The cache and any in-flight request are kept.
    pub fn pointer_leave(&self) {
        lock(&self.state).tooltip_visible = false;
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn insight(&self) -> Option<String> {
        lock(&self.state).cached_insight().map(str::to_owned)
    }

    pub fn view(&self) -> CardView {
        let state = lock(&self.state);
        let tooltip = state.tooltip_visible.then(|| {
            if state.loading {
                String::from(INSIGHT_LOADING)
            } else {
                state.cached_insight().unwrap_or_default().to_owned()
            }
        });

        CardView {
            title: self.title.clone(),
            value: state.value.clone(),
            tooltip,
        }
    }

    pub fn render(&self) -> String {
        let view = self.view();
        let mut out = format!("{}\n{}", view.title, view.value);
        if let Some(tooltip) = view.tooltip.filter(|text| !text.is_empty()) {
            out.push_str(&format!("\n  > {tooltip}"));
        }
        out
    }
}
