use csv::StringRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{parse_temperature, Month, Reading, SeasonMap};

/// Reads one yearly table (a station column plus twelve month columns) and
/// melts it into one reading per station and month.
///
/// Headers and cells are trimmed, so `" A"` and `"A"` name the same station.
/// Short rows are padded with missing cells; rows longer than the header are
/// rejected.
pub struct MonthlyCsvReader {
    station_column: String,
    season_map: SeasonMap,
}

/// Column positions resolved from a header row
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnLayout {
    station: usize,
    months: [usize; 12],
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord, station_column: &str, path: &Path) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ProcessingError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })
        };

        let station = find(station_column)?;
        let mut months = [0usize; 12];
        for month in Month::ALL {
            months[month.index()] = find(month.name())?;
        }

        Ok(Self { station, months })
    }
}

impl MonthlyCsvReader {
    pub fn new(station_column: impl Into<String>, season_map: SeasonMap) -> Self {
        Self {
            station_column: station_column.into(),
            season_map,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.station_column.clone(), config.season_map)
    }

    /// Read every reading from a table on disk
    pub fn read_file(&self, path: &Path) -> Result<Vec<Reading>> {
        let bytes = fs::read(path)?;
        self.read_bytes(&bytes, path)
    }

    /// Read readings from raw file contents; `path` is only used in errors
    pub fn read_bytes(&self, bytes: &[u8], path: &Path) -> Result<Vec<Reading>> {
        let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
        if had_errors {
            warn!(
                file = %path.display(),
                "Invalid UTF-8 sequences replaced while decoding"
            );
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let layout = ColumnLayout::resolve(&headers, &self.station_column, path)?;

        let mut readings = Vec::new();
        let mut rows = 0usize;
        for result in reader.records() {
            let record = result?;
            rows += 1;
            if record.len() > headers.len() {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Row {} has {} fields but the header has {}",
                    rows,
                    record.len(),
                    headers.len()
                )));
            }
            self.melt_row(&record, &layout, &mut readings);
        }

        debug!(
            file = %path.display(),
            rows,
            readings = readings.len(),
            "Reshaped monthly table"
        );

        Ok(readings)
    }

    fn melt_row(&self, record: &StringRecord, layout: &ColumnLayout, out: &mut Vec<Reading>) {
        let station = record.get(layout.station).unwrap_or_default();

        for month in Month::ALL {
            let cell = record.get(layout.months[month.index()]).unwrap_or_default();
            out.push(Reading::new(
                station.to_string(),
                month,
                self.season_map.season_of(month),
                parse_temperature(cell),
            ));
        }
    }
}

impl Default for MonthlyCsvReader {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
