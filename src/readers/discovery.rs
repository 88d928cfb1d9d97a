use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::constants::CSV_EXTENSION;

/// List the yearly tables in `dir`: regular files with a `.csv` extension,
/// sorted by name so repeated runs read them in the same order.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if !path.is_file() || path.extension().map_or(true, |ext| ext != CSV_EXTENSION) {
            continue;
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}
