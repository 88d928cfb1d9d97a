use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::SeasonMap;
use crate::utils::constants::{
    AVERAGE_TEMP_FILE, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, RANGE_FILE, STABILITY_FILE,
    STATION_COLUMN,
};

/// Everything a pipeline run needs: where to read, where to write, and how
/// months group into seasons.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalysisConfig {
    pub input_dir: PathBuf,

    pub output_dir: PathBuf,

    #[validate(length(min = 1))]
    pub station_column: String,

    #[validate(length(min = 1))]
    pub average_file: String,

    #[validate(length(min = 1))]
    pub range_file: String,

    #[validate(length(min = 1))]
    pub stability_file: String,

    /// Log and skip files that fail to load instead of aborting the run
    pub skip_malformed_files: bool,

    #[serde(skip)]
    pub season_map: SeasonMap,
}

impl AnalysisConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    /// Layer built-in defaults under an optional settings file
    pub fn load(settings_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("input_dir", DEFAULT_INPUT_DIR)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("station_column", STATION_COLUMN)?
            .set_default("average_file", AVERAGE_TEMP_FILE)?
            .set_default("range_file", RANGE_FILE)?
            .set_default("stability_file", STABILITY_FILE)?
            .set_default("skip_malformed_files", false)?;

        if let Some(path) = settings_file {
            builder = builder.add_source(File::from(path));
        }

        let config: AnalysisConfig = builder.build()?.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_skip_malformed_files(mut self, skip: bool) -> Self {
        self.skip_malformed_files = skip;
        self
    }

    pub fn with_season_map(mut self, season_map: SeasonMap) -> Self {
        self.season_map = season_map;
        self
    }

    /// Field validation plus the cross-field rule that the three reports
    /// never share a file.
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        let names = [&self.average_file, &self.range_file, &self.stability_file];
        for (i, name) in names.iter().enumerate() {
            if names[i + 1..].contains(name) {
                return Err(ProcessingError::Config(format!(
                    "Report file '{}' is configured more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn average_path(&self) -> PathBuf {
        self.output_dir.join(&self.average_file)
    }

    pub fn range_path(&self) -> PathBuf {
        self.output_dir.join(&self.range_file)
    }

    pub fn stability_path(&self) -> PathBuf {
        self.output_dir.join(&self.stability_file)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            station_column: STATION_COLUMN.to_string(),
            average_file: AVERAGE_TEMP_FILE.to_string(),
            range_file: RANGE_FILE.to_string(),
            stability_file: STABILITY_FILE.to_string(),
            skip_malformed_files: false,
            season_map: SeasonMap::default(),
        }
    }
}
