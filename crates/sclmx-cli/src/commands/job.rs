//! DBUTIL job rendering command

use std::path::PathBuf;

use clap::Args;
use sclmx_core::report::render_job;
use sclmx_core::ScanConfig;

#[derive(Debug, Args)]
pub struct JobArgs {
    /// Scan configuration (TOML)
    #[arg(long)]
    pub config: PathBuf,
}

pub fn execute(args: JobArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScanConfig::load(&args.config)?;
    println!("{}", render_job(&config.job_card, &config.location()));
    Ok(())
}
