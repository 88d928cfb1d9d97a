use clap::Parser;
use climate_seasons::cli::{run, Cli};
use climate_seasons::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
