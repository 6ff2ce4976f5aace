//! Text rendering of the market and forecast series.
//!
//! Both charts share one plot routine: every series is sampled down to at
//! most [`PLOT_WIDTH`] columns and scaled onto [`PLOT_HEIGHT`] rows. Series
//! are drawn in order, so later glyphs win where they overlap.

use finboard_core::{format_date, ForecastPoint, MarketPoint};

pub const MARKET_CHART_TITLE: &str = "Market Price";
pub const FORECAST_CHART_TITLE: &str = "Forecast";

const PLOT_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 10;
const NO_DATA: &str = "no data";
const LABEL_WIDTH: usize = 10;

const LINE_GLYPH: char = '*';
const BAND_GLYPH: char = '.';

/// Closing price line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketChart {
    points: Vec<MarketPoint>,
}

impl MarketChart {
    pub fn new(points: Vec<MarketPoint>) -> Self {
        Self { points }
    }

    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.points
            .get(index)
            .map(|point| format!("{}  close: {}", format_date(point.date.as_str()), point.close))
    }

    pub fn render(&self) -> String {
        let close = self.points.iter().map(|p| p.close).collect::<Vec<_>>();
        let dates = self.points.iter().map(|p| p.date.as_str()).collect::<Vec<_>>();
        render_chart(MARKET_CHART_TITLE, &dates, &[(close.as_slice(), LINE_GLYPH)])
    }
}

/// Predicted line inside its upper/lower band.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastChart {
    points: Vec<ForecastPoint>,
}

impl ForecastChart {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.points.get(index).map(|point| {
            format!(
                "{}  predicted: {}  upper: {}  lower: {}",
                format_date(point.date.as_str()),
                point.predicted,
                point.upper_bound,
                point.lower_bound
            )
        })
    }

    pub fn render(&self) -> String {
        let upper = self.points.iter().map(|p| p.upper_bound).collect::<Vec<_>>();
        let lower = self.points.iter().map(|p| p.lower_bound).collect::<Vec<_>>();
        let predicted = self.points.iter().map(|p| p.predicted).collect::<Vec<_>>();
        let dates = self.points.iter().map(|p| p.date.as_str()).collect::<Vec<_>>();
        render_chart(
            FORECAST_CHART_TITLE,
            &dates,
            &[
                (upper.as_slice(), BAND_GLYPH),
                (lower.as_slice(), BAND_GLYPH),
                (predicted.as_slice(), LINE_GLYPH),
            ],
        )
    }
}

fn render_chart(title: &str, dates: &[&str], series: &[(&[f64], char)]) -> String {
    let finite = series
        .iter()
        .flat_map(|(values, _)| values.iter().copied())
        .filter(|value| value.is_finite());
    let range = finite.fold(None, |range: Option<(f64, f64)>, value| match range {
        Some((min, max)) => Some((min.min(value), max.max(value))),
        None => Some((value, value)),
    });

    let mut out = String::from(title);
    out.push('\n');

    let Some((min, max)) = range else {
        out.push_str(&empty_container());
        return out;
    };

    let columns = dates.len().min(PLOT_WIDTH);
    let mut grid = vec![vec![' '; columns]; PLOT_HEIGHT];
    for (values, glyph) in series {
        for (column, value) in sample(values, columns).into_iter().enumerate() {
            if value.is_finite() {
                grid[row_for(value, min, max)][column] = *glyph;
            }
        }
    }

    let blank = " ".repeat(LABEL_WIDTH);
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{max:>width$.2}", width = LABEL_WIDTH)
        } else if row == PLOT_HEIGHT - 1 {
            format!("{min:>width$.2}", width = LABEL_WIDTH)
        } else {
            blank.clone()
        };
        let line = cells.iter().collect::<String>();
        out.push_str(&format!("{label} |{}\n", line.trim_end()));
    }
    out.push_str(&format!("{blank} +{}\n", "-".repeat(columns)));

    let first = dates.first().map(|d| format_date(*d)).unwrap_or_default();
    let last = dates.last().map(|d| format_date(*d)).unwrap_or_default();
    if dates.len() > 1 {
        out.push_str(&format!("{blank}  {first} .. {last}"));
    } else {
        out.push_str(&format!("{blank}  {first}"));
    }
    out
}

fn empty_container() -> String {
    let inner = PLOT_WIDTH / 2;
    let border = "-".repeat(inner);
    format!("+{border}+\n|{NO_DATA:^inner$}|\n+{border}+")
}

/// Pick `columns` evenly spaced values.
fn sample(values: &[f64], columns: usize) -> Vec<f64> {
    if values.len() <= columns {
        return values.to_vec();
    }
    (0..columns)
        .map(|column| values[column * values.len() / columns])
        .collect()
}

fn row_for(value: f64, min: f64, max: f64) -> usize {
    if max <= min {
        return PLOT_HEIGHT / 2;
    }
    let scaled = (max - value) / (max - min) * (PLOT_HEIGHT - 1) as f64;
    (scaled.round() as usize).min(PLOT_HEIGHT - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_keeps_short_series_and_thins_long_ones() {
        assert_eq!(sample(&[1.0, 2.0], 60), vec![1.0, 2.0]);

        let long = (0..120u32).map(f64::from).collect::<Vec<_>>();
        let thinned = sample(&long, 60);
        assert_eq!(thinned.len(), 60);
        assert_eq!(thinned[0], 0.0);
        assert_eq!(thinned[59], 118.0);
    }

    #[test]
    fn extremes_map_to_outer_rows() {
        assert_eq!(row_for(10.0, 0.0, 10.0), 0);
        assert_eq!(row_for(0.0, 0.0, 10.0), PLOT_HEIGHT - 1);
        assert_eq!(row_for(5.0, 5.0, 5.0), PLOT_HEIGHT / 2);
    }

    #[test]
    fn all_nan_series_renders_like_empty() {
        let chart = MarketChart::new(vec![MarketPoint::new("2024-01-01", f64::NAN)]);

        assert!(chart.render().contains(NO_DATA));
    }
}
