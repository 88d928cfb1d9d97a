use serde::{Deserialize, Serialize};

use super::{Month, Season};

/// One reshaped cell of a monthly table. A temperature that could not be
/// parsed is kept as `None` until consolidation drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub station: String,
    pub month: Month,
    pub season: Season,
    pub temperature: Option<f64>,
}

impl Reading {
    pub fn new(station: String, month: Month, season: Season, temperature: Option<f64>) -> Self {
        Self {
            station,
            month,
            season,
            temperature,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.temperature.is_none()
    }

    /// Promote to an observation when a temperature is present
    pub fn into_observation(self) -> Option<Observation> {
        let temperature = self.temperature?;
        Some(Observation {
            station: self.station,
            month: self.month,
            season: self.season,
            temperature,
        })
    }
}

/// A consolidated reading; always carries a temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub station: String,
    pub month: Month,
    pub season: Season,
    pub temperature: f64,
}

impl Observation {
    /// Readings with a blank station cell count toward seasons only
    pub fn has_station(&self) -> bool {
        !self.station.is_empty()
    }
}

/// Coerce a raw cell to a temperature. Anything that is not a finite
/// number becomes missing.
pub fn parse_temperature(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
