use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::discovery::discover_csv_files;
use super::monthly_reader::MonthlyCsvReader;
use crate::config::AnalysisConfig;
use crate::error::{ProcessingError, Result};
use crate::models::Reading;
use crate::utils::progress::ProgressReporter;

/// Readings loaded from one input table
#[derive(Debug, Clone)]
pub struct FileReadings {
    pub path: PathBuf,
    pub readings: Vec<Reading>,
}

/// A table that failed to load while skipping was enabled
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct IngestedData {
    pub files: Vec<FileReadings>,
    pub skipped: Vec<SkippedFile>,
}

impl IngestedData {
    pub fn total_readings(&self) -> usize {
        self.files.iter().map(|f| f.readings.len()).sum()
    }
}

/// Reads every yearly table in a directory, one file at a time.
pub struct DirectoryReader {
    reader: MonthlyCsvReader,
    skip_malformed: bool,
}

impl DirectoryReader {
    pub fn new(reader: MonthlyCsvReader) -> Self {
        Self {
            reader,
            skip_malformed: false,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(MonthlyCsvReader::from_config(config))
            .with_skip_malformed(config.skip_malformed_files)
    }

    pub fn with_skip_malformed(mut self, skip_malformed: bool) -> Self {
        self.skip_malformed = skip_malformed;
        self
    }

    /// Load all tables under `dir`. Finding nothing to load is an error:
    /// either no `.csv` files exist or every one of them was skipped.
    pub fn read_directory(
        &self,
        dir: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<IngestedData> {
        let paths = discover_csv_files(dir)?;
        info!(dir = %dir.display(), files = paths.len(), "Discovered input tables");

        if paths.is_empty() {
            return Err(ProcessingError::NoInputFiles {
                dir: dir.to_path_buf(),
            });
        }

        if let Some(progress) = progress {
            progress.set_length(paths.len() as u64);
        }

        let mut data = IngestedData::default();
        for path in paths {
            if let Some(progress) = progress {
                progress.set_message(&format!("Reading {}", path.display()));
            }

            match self.reader.read_file(&path) {
                Ok(readings) => data.files.push(FileReadings { path, readings }),
                Err(err) if self.skip_malformed => {
                    warn!(file = %path.display(), error = %err, "Skipping unreadable table");
                    data.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err.in_file(path)),
            }

            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        if data.files.is_empty() {
            return Err(ProcessingError::NoInputFiles {
                dir: dir.to_path_buf(),
            });
        }

        Ok(data)
    }
}
