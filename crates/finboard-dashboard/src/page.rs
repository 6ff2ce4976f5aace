//! The whole dashboard: search box, KPI grid and both charts.

use std::sync::Mutex;
use std::time::Duration;

use finboard_core::{DashboardConfig, FinanceClient, Symbol};
use tokio::task::JoinHandle;

use crate::chart::{ForecastChart, MarketChart};
use crate::controller::{DashboardController, DashboardSnapshot};
use crate::kpi_card::KpiCard;
use crate::kpi_grid::KpiGrid;
use crate::search::SymbolSearch;
use crate::sync::lock;

pub const DASHBOARD_TITLE: &str = "📊 Financial Dashboard";

pub struct DashboardPage {
    client: FinanceClient,
    controller: DashboardController,
    search: SymbolSearch,
    grid: Mutex<Option<KpiGrid>>,
}

impl DashboardPage {
    /// Wire search selection into the controller. Nothing is loaded until
    /// [`Self::mount`] or an explicit [`DashboardController::refresh`].
    pub fn new(client: FinanceClient, symbol: Option<Symbol>, refresh_interval: Duration) -> Self {
        let controller = DashboardController::new(client.clone(), symbol.clone(), refresh_interval);
        let search = SymbolSearch::mount(client.clone(), symbol, controller.selection_callback());

        Self {
            client,
            controller,
            search,
            grid: Mutex::new(None),
        }
    }

    /// Build the page and start the refresh schedule.
    pub fn mount(
        client: FinanceClient,
        symbol: Option<Symbol>,
        refresh_interval: Duration,
    ) -> Self {
        let page = Self::new(client, symbol, refresh_interval);
        page.controller.mount();
        page
    }

    pub fn from_config(client: FinanceClient, config: &DashboardConfig) -> Self {
        Self::mount(client, config.default_symbol.clone(), config.refresh_interval)
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    pub fn search(&self) -> &SymbolSearch {
        &self.search
    }

    /// Card `index` of the grid, once KPIs are loaded.
    pub fn kpi_card(&self, index: usize) -> Option<KpiCard> {
        self.sync_grid();
        lock(&self.grid)
            .as_ref()
            .and_then(|grid| grid.cards().get(index).cloned())
    }

    pub fn hover_kpi(&self, index: usize) -> Option<JoinHandle<()>> {
        self.kpi_card(index)?.pointer_enter()
    }

    pub fn leave_kpi(&self, index: usize) {
        if let Some(card) = self.kpi_card(index) {
            card.pointer_leave();
        }
    }

    pub fn render(&self) -> String {
        let snapshot = self.sync_grid();
        let mut sections = vec![String::from(DASHBOARD_TITLE), self.search.render()];

        if let Some(symbol) = &snapshot.symbol {
            sections.push(format!("Symbol: {symbol}"));
        }
        if let Some(grid) = lock(&self.grid).as_ref() {
            sections.push(grid.render());
        }
        sections.push(MarketChart::new(snapshot.market).render());
        sections.push(ForecastChart::new(snapshot.forecast).render());

        sections.join("\n\n")
    }

    pub fn unmount(&self) {
        self.controller.unmount();
        self.search.unmount();
    }

    /// Build the grid on the first KPI set, update it in place afterwards.
    fn sync_grid(&self) -> DashboardSnapshot {
        let snapshot = self.controller.snapshot();
        if let Some(kpis) = &snapshot.kpis {
            let mut grid = lock(&self.grid);
            match grid.as_ref() {
                Some(existing) => existing.update(kpis, snapshot.symbol.clone()),
                None => {
                    *grid = Some(KpiGrid::new(
                        self.client.clone(),
                        kpis,
                        snapshot.symbol.clone(),
                    ))
                }
            }
        }
        snapshot
    }
}
