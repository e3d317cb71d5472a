//! toolstep CLI - inspect, normalize, and generate toolpath designs

use anyhow::Result;
use clap::Parser;
use toolstep::cli::{execute, Cli};
use toolstep::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    execute(&cli)?.print()
}
