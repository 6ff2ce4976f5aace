//! Debounced symbol search box.
//!
//! Typing goes through [`SymbolSearch::set_query`]. Every keystroke advances
//! a generation counter and aborts the pending debounce timer; a lookup only
//! writes its results back if its generation is still current, so slow
//! responses for an old query can never overwrite newer ones.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use finboard_core::{FinanceClient, SearchResult, Symbol};
use tokio::task::JoinHandle;

use crate::sync::lock;

/// Quiet period before a lookup is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);
/// Shorter queries clear the results and never reach the service.
pub const MIN_QUERY_LEN: usize = 2;
pub const SEARCH_LOADING: &str = "Searching...";
pub const SEARCH_PLACEHOLDER: &str = "Search symbol (AAPL, TSLA...)";

/// Receives the symbol the user settled on.
pub type SelectionCallback = Arc<dyn Fn(Symbol) + Send + Sync>;

#[derive(Default)]
struct SearchState {
    query: String,
    results: Vec<SearchResult>,
    loading: bool,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl SearchState {
    /// Invalidate outstanding lookups and stop the pending timer.
    fn advance(&mut self) -> u64 {
        self.generation += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation
    }
}

pub struct SymbolSearch {
    client: FinanceClient,
    on_select: SelectionCallback,
    state: Arc<Mutex<SearchState>>,
}

impl SymbolSearch {
    /// Create the widget. An initial symbol fills the box and is reported
    /// through `on_select` once; it does not trigger a lookup.
    pub fn mount(
        client: FinanceClient,
        initial: Option<Symbol>,
        on_select: SelectionCallback,
    ) -> Self {
        let state = SearchState {
            query: initial.as_ref().map(ToString::to_string).unwrap_or_default(),
            ..SearchState::default()
        };
        let search = Self {
            client,
            on_select,
            state: Arc::new(Mutex::new(state)),
        };

        if let Some(symbol) = initial {
            (search.on_select)(symbol);
        }
        search
    }

    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = lock(&self.state);
        let generation = state.advance();
        state.query = text.clone();

        if text.chars().count() < MIN_QUERY_LEN {
            state.results.clear();
            state.loading = false;
            return;
        }

        tracing::debug!(query = %text, generation, "search scheduled");
        let client = self.client.clone();
        let shared = Arc::clone(&self.state);
        state.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            {
                let mut state = lock(&shared);
                if state.generation != generation {
                    return;
                }
                state.loading = true;
                state.timer = None;
            }
            // Detached so a later keystroke cannot cancel the request itself.
            tokio::spawn(lookup(client, shared, text, generation));
        }));
    }

    /// Pick result `index`: report it, put it in the box, close the list.
    /// A result whose ticker is not a valid symbol is left in the list.
    pub fn select(&self, index: usize) -> Option<Symbol> {
        let symbol = {
            let mut state = lock(&self.state);
            let raw = &state.results.get(index)?.symbol;
            let symbol = match Symbol::parse(raw) {
                Ok(symbol) => symbol,
                Err(error) => {
                    tracing::warn!(symbol = %raw, %error, "search result is not selectable");
                    return None;
                }
            };
            state.advance();
            state.query = symbol.to_string();
            state.results.clear();
            state.loading = false;
            symbol
        };

        (self.on_select)(symbol.clone());
        Some(symbol)
    }

    pub fn query(&self) -> String {
        lock(&self.state).query.clone()
    }

    pub fn results(&self) -> Vec<SearchResult> {
        lock(&self.state).results.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn render(&self) -> String {
        let state = lock(&self.state);
        let mut out = if state.query.is_empty() {
            format!("[ {SEARCH_PLACEHOLDER} ]")
        } else {
            format!("[ {} ]", state.query)
        };

        if state.loading {
            out.push('\n');
            out.push_str(SEARCH_LOADING);
        }
        for (index, result) in state.results.iter().enumerate() {
            out.push_str(&format!(
                "\n  {}. {} – {} ({})",
                index + 1,
                result.symbol,
                result.name,
                result.region
            ));
        }
        out
    }

    /// Cancel the pending debounce timer. A lookup already in flight runs
    /// to completion and is discarded.
    pub fn unmount(&self) {
        lock(&self.state).advance();
    }
}

impl Drop for SymbolSearch {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn lookup(
    client: FinanceClient,
    state: Arc<Mutex<SearchState>>,
    query: String,
    generation: u64,
) {
    let outcome = client.search_symbols(&query).await;

    let mut state = lock(&state);
    if state.generation != generation {
        tracing::debug!(query = %query, generation, "stale search result discarded");
        return;
    }

    state.results = match outcome {
        Ok(response) => response.results,
        Err(error) => {
            tracing::error!(query = %query, %error, "symbol search failed");
            Vec::new()
        }
    };
    state.loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_bumps_generation_without_timer() {
        let mut state = SearchState::default();

        assert_eq!(state.advance(), 1);
        assert_eq!(state.advance(), 2);
        assert!(state.timer.is_none());
    }
}
