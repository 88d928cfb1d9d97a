use serde::{Deserialize, Serialize};
use std::fmt;

use super::Month;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    /// Report order for seasonal summaries
    pub const DISPLAY_ORDER: [Season; 4] =
        [Season::Summer, Season::Autumn, Season::Winter, Season::Spring];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Total month to season table, indexed by calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonMap {
    seasons: [Season; 12],
}

impl SeasonMap {
    /// Build a map from one season per month, January first
    pub fn new(seasons: [Season; 12]) -> Self {
        Self { seasons }
    }

    /// December to February is summer.
    pub fn southern_hemisphere() -> Self {
        use Season::*;
        Self::new([
            Summer, Summer, Autumn, Autumn, Autumn, Winter, Winter, Winter, Spring, Spring,
            Spring, Summer,
        ])
    }

    pub fn season_of(&self, month: Month) -> Season {
        self.seasons[month.index()]
    }

    pub fn months_in(&self, season: Season) -> impl Iterator<Item = Month> + '_ {
        Month::ALL
            .into_iter()
            .filter(move |m| self.season_of(*m) == season)
    }
}

impl Default for SeasonMap {
    fn default() -> Self {
        Self::southern_hemisphere()
    }
}
