use std::path::PathBuf;
use tracing::info;

use crate::models::Dataset;
use crate::readers::IngestedData;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidationReport {
    pub files_loaded: usize,
    pub files_skipped: Vec<PathBuf>,
    pub total_readings: usize,
    pub missing_readings: usize,
    pub observations: usize,
    pub stations: usize,
}

/// Merges per-file readings into one dataset, dropping readings without a
/// temperature. Nothing is deduplicated: the same station in two files is
/// one station with both files' readings.
pub struct Consolidator;

impl Consolidator {
    pub fn new() -> Self {
        Self
    }

    pub fn consolidate(&self, data: IngestedData) -> (Dataset, ConsolidationReport) {
        let mut report = ConsolidationReport {
            files_loaded: data.files.len(),
            files_skipped: data.skipped.into_iter().map(|s| s.path).collect(),
            ..Default::default()
        };

        let dataset: Dataset = data
            .files
            .into_iter()
            .flat_map(|file| file.readings)
            .inspect(|_| report.total_readings += 1)
            .filter_map(|reading| reading.into_observation())
            .collect();

        report.observations = dataset.len();
        report.missing_readings = report.total_readings - report.observations;
        report.stations = dataset.station_names().len();

        info!(
            files = report.files_loaded,
            readings = report.total_readings,
            dropped = report.missing_readings,
            stations = report.stations,
            "Consolidated readings"
        );

        (dataset, report)
    }

    pub fn generate_summary(&self, report: &ConsolidationReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Consolidation Report ===\n");
        summary.push_str(&format!("Files Loaded: {}\n", report.files_loaded));
        summary.push_str(&format!("Files Skipped: {}\n", report.files_skipped.len()));
        for path in &report.files_skipped {
            summary.push_str(&format!("  - {}\n", path.display()));
        }
        summary.push_str(&format!("Total Readings: {}\n", report.total_readings));
        summary.push_str(&format!(
            "Missing Temperatures: {} ({:.1}%)\n",
            report.missing_readings,
            percentage(report.missing_readings, report.total_readings)
        ));
        summary.push_str(&format!("Usable Readings: {}\n", report.observations));
        summary.push_str(&format!("Stations: {}\n", report.stations));

        summary
    }
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new()
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Reading, Season};
    use crate::readers::{FileReadings, SkippedFile};

    fn reading(station: &str, month: Month, temperature: Option<f64>) -> Reading {
        Reading::new(station.to_string(), month, Season::Summer, temperature)
    }

    #[test]
    fn test_consolidate_drops_missing_and_keeps_duplicates() {
        let data = IngestedData {
            files: vec![
                FileReadings {
                    path: PathBuf::from("2020.csv"),
                    readings: vec![
                        reading("A", Month::January, Some(10.0)),
                        reading("A", Month::February, None),
                    ],
                },
                FileReadings {
                    path: PathBuf::from("2021.csv"),
                    readings: vec![
                        reading("A", Month::January, Some(10.0)),
                        reading("B", Month::January, Some(12.0)),
                    ],
                },
            ],
            skipped: vec![SkippedFile {
                path: PathBuf::from("bad.csv"),
                reason: "broken".to_string(),
            }],
        };

        let (dataset, report) = Consolidator::new().consolidate(data);

        assert_eq!(dataset.len(), 3);
        assert!(dataset.observations().iter().all(|o| o.temperature.is_finite()));
        assert_eq!(
            report,
            ConsolidationReport {
                files_loaded: 2,
                files_skipped: vec![PathBuf::from("bad.csv")],
                total_readings: 4,
                missing_readings: 1,
                observations: 3,
                stations: 2,
            }
        );
    }

    #[test]
    fn test_summary_handles_empty_input() {
        let consolidator = Consolidator::new();
        let (dataset, report) = consolidator.consolidate(IngestedData::default());

        assert!(dataset.is_empty());
        let summary = consolidator.generate_summary(&report);
        assert!(summary.contains("Missing Temperatures: 0 (0.0%)"));
        assert!(summary.contains("Stations: 0"));
    }
}
