use std::path::{Path, PathBuf};

use super::args::{Cli, Commands};
use super::logging::init_logging;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::processors::{Consolidator, Pipeline};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Analyze {
            input_dir,
            output_dir,
            config,
            skip_malformed,
            allow_empty,
            quiet,
        } => {
            let config = build_config(config.as_deref(), input_dir, output_dir, skip_malformed)?;

            println!("Analysing monthly temperature tables...");
            println!("Input directory: {}", config.input_dir.display());
            println!("Output directory: {}", config.output_dir.display());

            let pipeline = Pipeline::new(config).with_progress(!quiet);
            let summary = match pipeline.run() {
                Ok(summary) => summary,
                Err(err) if allow_empty && err.is_no_input() => {
                    println!("{} - nothing to do", err);
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            if !summary.consolidation.files_skipped.is_empty() {
                println!(
                    "⚠️  Skipped {} unreadable file(s)",
                    summary.consolidation.files_skipped.len()
                );
            }

            println!("Analysis complete. Output files generated:");
            for path in &summary.output_files {
                println!("- {}", path.display());
            }
        }

        Commands::Validate {
            input_dir,
            config,
            skip_malformed,
        } => {
            let config = build_config(config.as_deref(), input_dir, None, skip_malformed)?;

            println!("Validating monthly temperature tables...");
            println!("Input directory: {}", config.input_dir.display());

            let (_dataset, report) = Pipeline::new(config).load()?;
            println!("\n{}", Consolidator::new().generate_summary(&report));

            if report.files_skipped.is_empty() {
                println!("✅ All tables loaded");
            } else {
                println!("⚠️  {} table(s) could not be loaded", report.files_skipped.len());
            }
        }
    }

    Ok(())
}

/// Settings file first, then command-line overrides
fn build_config(
    settings_file: Option<&Path>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    skip_malformed: bool,
) -> Result<AnalysisConfig> {
    let mut config = AnalysisConfig::load(settings_file)?;

    if let Some(dir) = input_dir {
        config = config.with_input_dir(dir);
    }
    if let Some(dir) = output_dir {
        config = config.with_output_dir(dir);
    }
    if skip_malformed {
        config = config.with_skip_malformed_files(true);
    }

    Ok(config)
}
