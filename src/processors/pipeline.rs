use std::path::PathBuf;
use tracing::info;

use super::consolidator::{ConsolidationReport, Consolidator};
use crate::analyzers::{SeasonalAnalyzer, StationAnalyzer};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::Dataset;
use crate::readers::DirectoryReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;

/// Rendered report bodies, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReports {
    pub average: String,
    pub range: String,
    pub stability: String,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub consolidation: ConsolidationReport,
    pub output_files: Vec<PathBuf>,
}

/// Ingest, consolidate, aggregate, report. Runs strictly in that order and
/// writes nothing until every report has been rendered.
pub struct Pipeline {
    config: AnalysisConfig,
    silent: bool,
}

impl Pipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            silent: true,
        }
    }

    /// Show a console progress bar while reading files
    pub fn with_progress(mut self, show: bool) -> Self {
        self.silent = !show;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Read and consolidate every table in the input directory
    pub fn load(&self) -> Result<(Dataset, ConsolidationReport)> {
        self.config.check()?;
        info!(input_dir = %self.config.input_dir.display(), "Loading monthly tables");

        let reader = DirectoryReader::from_config(&self.config);
        let progress = ProgressReporter::new(0, "Reading monthly tables...", self.silent);
        let data = reader.read_directory(&self.config.input_dir, Some(&progress))?;
        progress.finish_with_message(&format!("Read {} files", data.files.len()));

        Ok(Consolidator::new().consolidate(data))
    }

    /// Compute the three summaries and render them
    pub fn render(&self, dataset: &Dataset) -> RenderedReports {
        let writer = ReportWriter::new();
        let stations = StationAnalyzer::new();

        let seasonal = SeasonalAnalyzer::new().analyze(dataset);
        let aggregates = stations.aggregate(dataset);
        let largest = stations.largest_range(&aggregates);
        let stability = stations.stability(&aggregates);

        info!(
            seasons = seasonal.len(),
            stations = aggregates.len(),
            largest_range = largest.len(),
            "Aggregated dataset"
        );

        RenderedReports {
            average: writer.render_seasonal(&seasonal),
            range: writer.render_range(&largest),
            stability: writer.render_stability(&stability),
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let (dataset, consolidation) = self.load()?;
        let reports = self.render(&dataset);

        let writer = ReportWriter::new();
        let outputs = [
            (self.config.average_path(), &reports.average),
            (self.config.range_path(), &reports.range),
            (self.config.stability_path(), &reports.stability),
        ];

        let mut output_files = Vec::with_capacity(outputs.len());
        for (path, contents) in outputs {
            writer.write(&path, contents)?;
            output_files.push(path);
        }

        Ok(RunSummary {
            consolidation,
            output_files,
        })
    }
}
