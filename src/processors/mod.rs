pub mod consolidator;
pub mod pipeline;

pub use consolidator::{ConsolidationReport, Consolidator};
pub use pipeline::{Pipeline, RenderedReports, RunSummary};
