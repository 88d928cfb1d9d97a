use serde::{Deserialize, Serialize};

/// Derived statistics for one station over every consolidated reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationAggregate {
    pub name: String,
    pub count: usize,
    pub max_temp: f64,
    pub min_temp: f64,
    pub range: f64,
    /// Sample standard deviation; undefined below two readings.
    pub std_dev: Option<f64>,
}

impl StationAggregate {
    pub fn new(
        name: String,
        count: usize,
        max_temp: f64,
        min_temp: f64,
        std_dev: Option<f64>,
    ) -> Self {
        Self {
            name,
            count,
            max_temp,
            min_temp,
            range: max_temp - min_temp,
            std_dev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_max_minus_min() {
        let station = StationAggregate::new("A".to_string(), 2, 30.0, 10.0, Some(14.1));
        assert_eq!(station.range, 20.0);
        assert!(station.range >= 0.0);
    }
}
