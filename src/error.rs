use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No CSV files loaded from {}", dir.display())]
    NoInputFiles { dir: PathBuf },

    #[error("Column '{column}' missing from {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ProcessingError>,
    },
}

impl ProcessingError {
    /// Attach the offending input file to an error raised while loading it
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            err @ (ProcessingError::File { .. } | ProcessingError::MissingColumn { .. }) => err,
            other => ProcessingError::File {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    pub fn is_no_input(&self) -> bool {
        matches!(self, ProcessingError::NoInputFiles { .. })
    }
}
