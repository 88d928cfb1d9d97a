use std::collections::HashMap;
use tracing::debug;

use crate::models::{Dataset, Season};
use crate::utils::stats::mean;

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalMean {
    pub season: Season,
    pub mean: f64,
    pub count: usize,
}

/// Mean temperature per season across every station and year.
pub struct SeasonalAnalyzer;

impl SeasonalAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Means in display order. Seasons without observations are left out.
    pub fn analyze(&self, dataset: &Dataset) -> Vec<SeasonalMean> {
        let mut by_season: HashMap<Season, Vec<f64>> = HashMap::new();
        for observation in dataset.observations() {
            by_season
                .entry(observation.season)
                .or_default()
                .push(observation.temperature);
        }

        Season::DISPLAY_ORDER
            .iter()
            .filter_map(|season| {
                let values = by_season.get(season)?;
                let mean = mean(values)?;
                debug!(season = %season, count = values.len(), mean, "Seasonal mean");
                Some(SeasonalMean {
                    season: *season,
                    mean,
                    count: values.len(),
                })
            })
            .collect()
    }
}

impl Default for SeasonalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Observation, SeasonMap};

    fn observe(station: &str, month: Month, temperature: f64) -> Observation {
        Observation {
            station: station.to_string(),
            month,
            season: SeasonMap::southern_hemisphere().season_of(month),
            temperature,
        }
    }

    #[test]
    fn test_means_across_stations() {
        let dataset: Dataset = vec![
            observe("A", Month::January, 30.0),
            observe("B", Month::December, 20.0),
            observe("A", Month::July, 5.0),
            observe("B", Month::June, 8.0),
            observe("B", Month::August, 2.0),
            observe("A", Month::April, 18.0),
        ]
        .into_iter()
        .collect();

        let means = SeasonalAnalyzer::new().analyze(&dataset);

        assert_eq!(
            means,
            vec![
                SeasonalMean {
                    season: Season::Summer,
                    mean: 25.0,
                    count: 2,
                },
                SeasonalMean {
                    season: Season::Autumn,
                    mean: 18.0,
                    count: 1,
                },
                SeasonalMean {
                    season: Season::Winter,
                    mean: 5.0,
                    count: 3,
                },
            ]
        );
    }

    #[test]
    fn test_empty_dataset() {
        assert!(SeasonalAnalyzer::new().analyze(&Dataset::default()).is_empty());
    }

    #[test]
    fn test_display_order_regardless_of_input_order() {
        let dataset: Dataset = vec![
            observe("A", Month::October, 15.0),
            observe("A", Month::July, 5.0),
            observe("A", Month::March, 20.0),
            observe("A", Month::February, 28.0),
        ]
        .into_iter()
        .collect();

        let seasons: Vec<Season> = SeasonalAnalyzer::new()
            .analyze(&dataset)
            .into_iter()
            .map(|m| m.season)
            .collect();

        assert_eq!(seasons, Season::DISPLAY_ORDER.to_vec());
    }
}
