pub mod seasonal;
pub mod station;

pub use seasonal::{SeasonalAnalyzer, SeasonalMean};
pub use station::{StabilityReport, StationAnalyzer, StationSpread};
