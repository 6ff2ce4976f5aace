//! Active symbol, its three data slices, and the refresh schedule.
//!
//! A load reads the active symbol, fetches market, forecast and KPIs in
//! parallel and applies all three at once. Changing the symbol advances a
//! generation counter; a load that finishes for an older generation is
//! discarded instead of overwriting data of the newer symbol.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use finboard_core::{
    DashboardConfig, FinanceClient, FinanceError, ForecastPoint, KpiSet, MarketPoint, Symbol,
};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::search::SelectionCallback;
use crate::sync::lock;

const EVENT_CAPACITY: usize = 64;

/// Everything the page renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub symbol: Option<Symbol>,
    pub market: Vec<MarketPoint>,
    pub forecast: Vec<ForecastPoint>,
    /// `None` until the first successful load.
    pub kpis: Option<KpiSet>,
}

/// Published after every load attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Loaded { symbol: Option<Symbol> },
    LoadFailed { symbol: Option<Symbol>, message: String },
    /// The active symbol changed while the load was in flight.
    Discarded { symbol: Option<Symbol> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Discarded,
}

struct ControllerState {
    snapshot: DashboardSnapshot,
    generation: u64,
}

struct Shared {
    client: FinanceClient,
    state: Mutex<ControllerState>,
    events: broadcast::Sender<DashboardEvent>,
}

impl Shared {
    async fn load(&self) -> Result<LoadOutcome, FinanceError> {
        let (symbol, generation) = {
            let state = lock(&self.state);
            (state.snapshot.symbol.clone(), state.generation)
        };

        let result = tokio::try_join!(
            self.client.get_market(symbol.as_ref()),
            self.client.get_forecast(symbol.as_ref()),
            self.client.get_kpis(symbol.as_ref()),
        );

        let mut state = lock(&self.state);
        if state.generation != generation {
            drop(state);
            tracing::debug!(symbol = ?symbol, generation, "stale dashboard load discarded");
            self.publish(DashboardEvent::Discarded { symbol });
            return Ok(LoadOutcome::Discarded);
        }

        match result {
            Ok((market, forecast, kpis)) => {
                state.snapshot.market = market.into_points();
                state.snapshot.forecast = forecast.forecast;
                state.snapshot.kpis = Some(kpis.kpis);
                drop(state);
                self.publish(DashboardEvent::Loaded { symbol });
                Ok(LoadOutcome::Applied)
            }
            Err(error) => {
                drop(state);
                self.publish(DashboardEvent::LoadFailed {
                    symbol,
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }

    fn publish(&self, event: DashboardEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn select_symbol(self: &Arc<Self>, symbol: Symbol) -> Option<JoinHandle<()>> {
        {
            let mut state = lock(&self.state);
            if state.snapshot.symbol.as_ref() == Some(&symbol) {
                return None;
            }
            tracing::info!(%symbol, "symbol selected");
            state.snapshot.symbol = Some(symbol);
            state.generation += 1;
        }
        Some(spawn_load(Arc::clone(self)))
    }
}

fn spawn_load(shared: Arc<Shared>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(error) = shared.load().await {
            tracing::error!(%error, "dashboard load failed");
        }
    })
}

pub struct DashboardController {
    shared: Arc<Shared>,
    refresh_interval: Duration,
    interval: Mutex<Option<JoinHandle<()>>>,
}

impl DashboardController {
    pub fn new(client: FinanceClient, symbol: Option<Symbol>, refresh_interval: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                client,
                state: Mutex::new(ControllerState {
                    snapshot: DashboardSnapshot {
                        symbol,
                        ..DashboardSnapshot::default()
                    },
                    generation: 0,
                }),
                events,
            }),
            refresh_interval,
            interval: Mutex::new(None),
        }
    }

    pub fn from_config(client: FinanceClient, config: &DashboardConfig) -> Self {
        Self::new(client, config.default_symbol.clone(), config.refresh_interval)
    }

    /// Load now and then once per refresh interval until [`Self::unmount`].
    /// Mounting again restarts the schedule.
    pub fn mount(&self) {
        let shared = Arc::clone(&self.shared);
        let period = self.refresh_interval.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                spawn_load(Arc::clone(&shared));
            }
        });

        if let Some(previous) = lock(&self.interval).replace(task) {
            previous.abort();
        }
    }

    /// Stop the refresh schedule. Loads already in flight still complete.
    pub fn unmount(&self) {
        if let Some(task) = lock(&self.interval).take() {
            task.abort();
        }
    }

    pub fn is_mounted(&self) -> bool {
        lock(&self.interval).is_some()
    }

    /// Load the active symbol and wait for the outcome.
    pub async fn refresh(&self) -> Result<LoadOutcome, FinanceError> {
        self.shared.load().await
    }

    /// Switch to `symbol` and load it right away. Selecting the active
    /// symbol again does nothing.
    pub fn select_symbol(&self, symbol: Symbol) -> Option<JoinHandle<()>> {
        self.shared.select_symbol(symbol)
    }

    /// Callback for [`crate::SymbolSearch`] feeding [`Self::select_symbol`].
    pub fn selection_callback(&self) -> SelectionCallback {
        let shared = Arc::clone(&self.shared);
        Arc::new(move |symbol| {
            shared.select_symbol(symbol);
        })
    }

    pub fn symbol(&self) -> Option<Symbol> {
        lock(&self.shared.state).snapshot.symbol.clone()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        lock(&self.shared.state).snapshot.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.shared.events.subscribe()
    }
}

impl Drop for DashboardController {
    fn drop(&mut self) {
        self.unmount();
    }
}
