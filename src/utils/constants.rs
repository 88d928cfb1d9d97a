/// Column holding the station identifier in every yearly table
pub const STATION_COLUMN: &str = "STATION_NAME";

/// Input file extension, matched exactly
pub const CSV_EXTENSION: &str = "csv";

/// Report file names
pub const AVERAGE_TEMP_FILE: &str = "average_temp.txt";
pub const RANGE_FILE: &str = "largest_temp_range_station.txt";
pub const STABILITY_FILE: &str = "temperature_stability_stations.txt";

/// Directory defaults
pub const DEFAULT_INPUT_DIR: &str = "temperatures";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Unit suffix appended to every reported temperature
pub const DEGREE_SUFFIX: &str = "°C";

/// Report labels
pub const MOST_STABLE_LABEL: &str = "Most Stable";
pub const MOST_VARIABLE_LABEL: &str = "Most Variable";
