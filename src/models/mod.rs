pub mod dataset;
pub mod month;
pub mod reading;
pub mod season;
pub mod station;

pub use dataset::Dataset;
pub use month::Month;
pub use reading::{parse_temperature, Observation, Reading};
pub use season::{Season, SeasonMap};
pub use station::StationAggregate;
