use std::collections::BTreeSet;

use super::Observation;

/// The consolidated multiset of observations from every input table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn station_names(&self) -> BTreeSet<&str> {
        self.observations
            .iter()
            .filter(|o| o.has_station())
            .map(|o| o.station.as_str())
            .collect()
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
