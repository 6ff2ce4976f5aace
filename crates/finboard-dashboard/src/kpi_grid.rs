//! The eight KPI cards of a [`KpiSet`].

use finboard_core::{FinanceClient, KpiSet, Symbol};

use crate::kpi_card::KpiCard;

/// Card titles in display order.
pub const KPI_TITLES: [&str; 8] = [
    "Last Price",
    "Daily Return",
    "Volatility",
    "MA 20",
    "MA 50",
    "RSI 14",
    "Drawdown",
    "Trend",
];

/// Display values for [`KPI_TITLES`], in the same order.
pub fn format_kpis(kpis: &KpiSet) -> [String; 8] {
    [
        format!("${}", kpis.last_price),
        format!("{}%", kpis.daily_return_pct),
        format!("{}%", kpis.volatility_pct),
        kpis.ma_20.to_string(),
        kpis.ma_50.to_string(),
        kpis.rsi_14.to_string(),
        format!("{}%", kpis.max_drawdown_pct),
        kpis.trend.to_string(),
    ]
}

pub struct KpiGrid {
    cards: Vec<KpiCard>,
}

impl KpiGrid {
    pub fn new(client: FinanceClient, kpis: &KpiSet, symbol: Option<Symbol>) -> Self {
        let cards = KPI_TITLES
            .iter()
            .zip(format_kpis(kpis))
            .map(|(title, value)| KpiCard::new(client.clone(), *title, value, symbol.clone()))
            .collect();

        Self { cards }
    }

    /// Push new values into the existing cards.
    pub fn update(&self, kpis: &KpiSet, symbol: Option<Symbol>) {
        for (card, value) in self.cards.iter().zip(format_kpis(kpis)) {
            card.update(value, symbol.clone());
        }
    }

    pub fn cards(&self) -> &[KpiCard] {
        &self.cards
    }

    pub fn card(&self, title: &str) -> Option<&KpiCard> {
        self.cards.iter().find(|card| card.title() == title)
    }

    pub fn render(&self) -> String {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let mut lines = card.render().lines().map(str::to_owned).collect::<Vec<_>>();
                if let Some(first) = lines.first_mut() {
                    *first = format!("[{}] {first}", index + 1);
                }
                lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| if i == 0 { line } else { format!("    {line}") })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use finboard_core::{NoopHttpClient, Trend};

    use super::*;

    fn kpis() -> KpiSet {
        KpiSet {
            last_price: 155.0,
            daily_return_pct: 1.2,
            volatility_pct: 2.5,
            ma_20: 150.0,
            ma_50: 145.0,
            rsi_14: 60.0,
            max_drawdown_pct: -5.0,
            trend: Trend::Bullish,
        }
    }

    fn client() -> FinanceClient {
        FinanceClient::new(Arc::new(NoopHttpClient), "http://finance.test")
    }

    #[test]
    fn values_use_unit_affixes_and_shortest_numbers() {
        assert_eq!(
            format_kpis(&kpis()),
            ["$155", "1.2%", "2.5%", "150", "145", "60", "-5%", "bullish"].map(String::from)
        );
    }

    #[test]
    fn grid_has_eight_cards_in_fixed_order() {
        let grid = KpiGrid::new(client(), &kpis(), None);

        let titles = grid.cards().iter().map(KpiCard::title).collect::<Vec<_>>();
        assert_eq!(titles, KPI_TITLES);
        assert_eq!(grid.card("RSI 14").map(KpiCard::value).as_deref(), Some("60"));
    }

    #[test]
    fn update_keeps_cards_and_replaces_values() {
        let grid = KpiGrid::new(client(), &kpis(), None);
        let before = grid.cards()[0].clone();

        let mut next = kpis();
        next.last_price = 160.5;
        next.trend = Trend::Bearish;
        grid.update(&next, None);

        assert_eq!(before.value(), "$160.5");
        assert_eq!(grid.card("Trend").map(KpiCard::value).as_deref(), Some("bearish"));
    }

    #[test]
    fn render_numbers_cards() {
        let grid = KpiGrid::new(client(), &kpis(), None);
        let text = grid.render();

        assert!(text.starts_with("[1] Last Price\n    $155"));
        assert!(text.contains("[8] Trend\n    bullish"));
    }
}
