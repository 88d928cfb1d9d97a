use std::fs;
use std::path::Path;
use tracing::info;

use crate::analyzers::{SeasonalMean, StabilityReport};
use crate::error::Result;
use crate::models::StationAggregate;
use crate::utils::constants::{DEGREE_SUFFIX, MOST_STABLE_LABEL, MOST_VARIABLE_LABEL};

/// Renders the three plain-text reports and writes them to disk. Every
/// temperature is shown to one decimal place.
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// `Summer: 24.3°C`, one line per season present
    pub fn render_seasonal(&self, means: &[SeasonalMean]) -> String {
        let mut out = String::new();
        for m in means {
            out.push_str(&format!("{}: {:.1}{}\n", m.season, m.mean, DEGREE_SUFFIX));
        }
        out
    }

    pub fn render_range(&self, stations: &[&StationAggregate]) -> String {
        let mut out = String::new();
        for s in stations {
            out.push_str(&format!(
                "Station {}: Range {:.1}{d} (Max: {:.1}{d}, Min: {:.1}{d})\n",
                s.name,
                s.range,
                s.max_temp,
                s.min_temp,
                d = DEGREE_SUFFIX
            ));
        }
        out
    }

    /// Most stable stations first, then most variable
    pub fn render_stability(&self, report: &StabilityReport) -> String {
        let mut out = String::new();
        let groups = [
            (MOST_STABLE_LABEL, &report.most_stable),
            (MOST_VARIABLE_LABEL, &report.most_variable),
        ];
        for (label, spreads) in groups {
            for s in spreads.iter() {
                out.push_str(&format!(
                    "{}: Station {}: StdDev {:.1}{}\n",
                    label, s.name, s.std_dev, DEGREE_SUFFIX
                ));
            }
        }
        out
    }

    /// Replace `path` with `contents`
    pub fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents)?;
        info!(file = %path.display(), bytes = contents.len(), "Wrote report");
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
