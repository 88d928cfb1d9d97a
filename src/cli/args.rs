use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-seasons")]
#[command(about = "Seasonal and per-station statistics from monthly temperature tables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse every CSV table in a directory and write the three reports
    Analyze {
        #[arg(
            short,
            long,
            help = "Directory of yearly CSV tables [default: temperatures]"
        )]
        input_dir: Option<PathBuf>,

        #[arg(short, long, help = "Directory for the report files [default: .]")]
        output_dir: Option<PathBuf>,

        #[arg(short, long, help = "Settings file (TOML, JSON or YAML)")]
        config: Option<PathBuf>,

        #[arg(long, help = "Log and skip tables that fail to load")]
        skip_malformed: bool,

        #[arg(long, help = "Exit successfully when no CSV files are found")]
        allow_empty: bool,

        #[arg(short, long, help = "Hide the progress bar")]
        quiet: bool,
    },

    /// Load and consolidate the tables without writing any report
    Validate {
        #[arg(
            short,
            long,
            help = "Directory of yearly CSV tables [default: temperatures]"
        )]
        input_dir: Option<PathBuf>,

        #[arg(short, long, help = "Settings file (TOML, JSON or YAML)")]
        config: Option<PathBuf>,

        #[arg(long, help = "Log and skip tables that fail to load")]
        skip_malformed: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "climate-seasons",
            "--verbose",
            "analyze",
            "-i",
            "data",
            "--skip-malformed",
            "--quiet",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze {
                input_dir,
                output_dir,
                skip_malformed,
                allow_empty,
                quiet,
                ..
            } => {
                assert_eq!(input_dir, Some(PathBuf::from("data")));
                assert_eq!(output_dir, None);
                assert!(skip_malformed);
                assert!(!allow_empty);
                assert!(quiet);
            }
            Commands::Validate { .. } => panic!("expected analyze"),
        }
    }
}
