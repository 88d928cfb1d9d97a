use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

use crate::error::{ProcessingError, Result};

/// Install the global tracing subscriber. Console output stays at warnings
/// unless `verbose`; a log file records info and above.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = match (verbose, log_file.is_some()) {
        (true, _) => Level::DEBUG,
        (false, true) => Level::INFO,
        (false, false) => Level::WARN,
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| ProcessingError::Config(format!("Failed to initialise logging: {}", e)))
}
