//! Summary statistics over a station-year discharge subset.

use gbd_core::discharge::DischargeReading;
use gbd_core::error::{DashboardError, Result};
use gbd_utils::numbers::format_thousands;
use serde::Serialize;

pub const MIN_LABEL: &str = "Min. Discharge (m³/s)";
pub const MAX_LABEL: &str = "Max. Discharge (m³/s)";
pub const MEAN_LABEL: &str = "Avg. Discharge (m³/s)";
/// Shown in place of a value when the subset is empty
pub const NO_DATA: &str = "No data";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DischargeStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub count: usize,
}

/// A labelled, display-ready statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl DischargeStats {
    pub fn from_readings(readings: &[DischargeReading]) -> Result<Self> {
        Self::from_values(readings.iter().map(|r| r.discharge))
    }

    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Result<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return Err(DashboardError::EmptyResultSet);
        }
        // rounding in the sum can push the mean a hair outside [min, max]
        let mean = (sum / count as f64).clamp(min, max);
        Ok(Self {
            min,
            max,
            mean,
            count,
        })
    }

    pub fn metrics(&self) -> [Metric; 3] {
        [
            Metric {
                label: MIN_LABEL,
                value: format_thousands(self.min, 2),
            },
            Metric {
                label: MAX_LABEL,
                value: format_thousands(self.max, 2),
            },
            Metric {
                label: MEAN_LABEL,
                value: format_thousands(self.mean, 2),
            },
        ]
    }
}

/// Metric cards for an optional summary; `None` renders as "No data".
pub fn metric_cards(stats: Option<&DischargeStats>) -> [Metric; 3] {
    match stats {
        Some(stats) => stats.metrics(),
        None => [MIN_LABEL, MAX_LABEL, MEAN_LABEL].map(|label| Metric {
            label,
            value: NO_DATA.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{seeded_rng, DischargeGenerator};

    #[test]
    fn min_mean_max_of_simple_values() {
        let stats = DischargeStats::from_values([10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn empty_subset_is_no_data() {
        let err = DischargeStats::from_readings(&[]).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyResultSet));
    }

    #[test]
    fn constant_series_mean_stays_within_bounds() {
        let stats = DischargeStats::from_values([0.1, 0.1, 0.1]).unwrap();
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn generated_year_ordering_holds() {
        let readings =
            DischargeGenerator::default().generate_year("AG000C3", 2020, &mut seeded_rng(Some(5)));
        let stats = DischargeStats::from_readings(&readings).unwrap();
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.min >= 5.0 && stats.max <= 50.0);
        assert_eq!(stats.count, 366);
    }

    #[test]
    fn metric_cards_format_two_decimals() {
        let stats = DischargeStats::from_values([1234.567, 5.0]).unwrap();
        let cards = metric_cards(Some(&stats));
        assert_eq!(cards[0].label, "Min. Discharge (m³/s)");
        assert_eq!(cards[0].value, "5.00");
        assert_eq!(cards[1].value, "1,234.57");
        assert_eq!(cards[2].label, "Avg. Discharge (m³/s)");
    }

    #[test]
    fn missing_stats_render_no_data() {
        let cards = metric_cards(None);
        assert!(cards.iter().all(|m| m.value == "No data"));
    }
}
