use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{Dataset, StationAggregate};
use crate::utils::stats::{min_max, sample_std_dev};

/// One station's standard deviation as it appears in the stability report
#[derive(Debug, Clone, PartialEq)]
pub struct StationSpread {
    pub name: String,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StabilityReport {
    pub most_stable: Vec<StationSpread>,
    pub most_variable: Vec<StationSpread>,
}

impl StabilityReport {
    pub fn is_empty(&self) -> bool {
        self.most_stable.is_empty() && self.most_variable.is_empty()
    }
}

/// Per-station statistics and the extremes drawn from them. Stations are
/// always visited in ascending name order, so tied results come out sorted.
pub struct StationAnalyzer;

impl StationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Max, min, range and sample standard deviation for every named station
    pub fn aggregate(&self, dataset: &Dataset) -> Vec<StationAggregate> {
        let mut by_station: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for observation in dataset.observations().iter().filter(|o| o.has_station()) {
            by_station
                .entry(observation.station.as_str())
                .or_default()
                .push(observation.temperature);
        }

        by_station
            .into_iter()
            .filter_map(|(name, values)| {
                let (min_temp, max_temp) = min_max(&values)?;
                Some(StationAggregate::new(
                    name.to_string(),
                    values.len(),
                    max_temp,
                    min_temp,
                    sample_std_dev(&values),
                ))
            })
            .collect()
    }

    /// Every station whose range equals the largest range
    pub fn largest_range<'a>(&self, stations: &'a [StationAggregate]) -> Vec<&'a StationAggregate> {
        let Some(max_range) = stations.iter().map(|s| s.range).reduce(f64::max) else {
            return Vec::new();
        };

        debug!(max_range, "Largest station range");
        stations.iter().filter(|s| s.range == max_range).collect()
    }

    /// Stations at the lowest and highest standard deviation. Stations with a
    /// single reading have no standard deviation and take no part.
    pub fn stability(&self, stations: &[StationAggregate]) -> StabilityReport {
        let spreads: Vec<StationSpread> = stations
            .iter()
            .filter_map(|s| {
                s.std_dev.map(|std_dev| StationSpread {
                    name: s.name.clone(),
                    std_dev,
                })
            })
            .collect();

        let excluded = stations.len() - spreads.len();
        if excluded > 0 {
            debug!(excluded, "Stations without a standard deviation");
        }

        let Some(min_std) = spreads.iter().map(|s| s.std_dev).reduce(f64::min) else {
            return StabilityReport::default();
        };
        let max_std = spreads
            .iter()
            .map(|s| s.std_dev)
            .fold(min_std, f64::max);

        StabilityReport {
            most_stable: spreads
                .iter()
                .filter(|s| s.std_dev == min_std)
                .cloned()
                .collect(),
            most_variable: spreads
                .iter()
                .filter(|s| s.std_dev == max_std)
                .cloned()
                .collect(),
        }
    }
}

impl Default for StationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Observation, Season};

    fn dataset(rows: &[(&str, f64)]) -> Dataset {
        rows.iter()
            .map(|(station, temperature)| Observation {
                station: station.to_string(),
                month: Month::January,
                season: Season::Summer,
                temperature: *temperature,
            })
            .collect()
    }

    #[test]
    fn test_aggregate_sorted_by_name() {
        let data = dataset(&[("B", 5.0), ("A", 10.0), ("B", 25.0), ("A", 30.0), ("", 99.0)]);
        let stations = StationAnalyzer::new().aggregate(&data);

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "A");
        assert_eq!(stations[0].max_temp, 30.0);
        assert_eq!(stations[0].min_temp, 10.0);
        assert_eq!(stations[0].range, 20.0);
        assert_eq!(stations[0].count, 2);
        assert_eq!(stations[1].name, "B");
        assert_eq!(stations[1].range, 20.0);
    }

    #[test]
    fn test_largest_range_keeps_ties() {
        let analyzer = StationAnalyzer::new();
        let data = dataset(&[
            ("A", 30.0),
            ("A", 10.0),
            ("B", 25.0),
            ("B", 5.0),
            ("C", 12.0),
            ("C", 8.0),
        ]);
        let stations = analyzer.aggregate(&data);
        let largest: Vec<&str> = analyzer
            .largest_range(&stations)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(largest, vec!["A", "B"]);
    }

    #[test]
    fn test_largest_range_empty() {
        assert!(StationAnalyzer::new().largest_range(&[]).is_empty());
    }

    #[test]
    fn test_single_reading_station() {
        let analyzer = StationAnalyzer::new();
        let data = dataset(&[("Solo", 14.0), ("Pair", 10.0), ("Pair", 14.0)]);
        let stations = analyzer.aggregate(&data);

        let solo = stations.iter().find(|s| s.name == "Solo").unwrap();
        assert_eq!(solo.range, 0.0);
        assert_eq!(solo.std_dev, None);

        let report = analyzer.stability(&stations);
        assert_eq!(report.most_stable.len(), 1);
        assert_eq!(report.most_stable[0].name, "Pair");
        assert_eq!(report.most_variable[0].name, "Pair");
    }

    #[test]
    fn test_stability_extremes_with_ties() {
        let analyzer = StationAnalyzer::new();
        let data = dataset(&[
            ("Calm", 10.0),
            ("Calm", 12.0),
            ("Still", 20.0),
            ("Still", 22.0),
            ("Wild", 0.0),
            ("Wild", 30.0),
        ]);
        let report = analyzer.stability(&analyzer.aggregate(&data));

        let stable: Vec<&str> = report.most_stable.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stable, vec!["Calm", "Still"]);
        assert_eq!(report.most_variable.len(), 1);
        assert_eq!(report.most_variable[0].name, "Wild");
        assert!((report.most_variable[0].std_dev - 450.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_stability_without_defined_values() {
        let analyzer = StationAnalyzer::new();
        let data = dataset(&[("A", 1.0), ("B", 2.0)]);
        assert!(analyzer.stability(&analyzer.aggregate(&data)).is_empty());
    }
}
