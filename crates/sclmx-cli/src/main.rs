//! SCLMX CLI
//!
//! Command-line interface for SCLM change detection

use clap::{Parser, Subcommand};
use sclmx_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "sclmx")]
#[command(about = "SCLMX - Change detection for SCLM libraries", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the DBUTIL report job for a location
    Job(commands::job::JobArgs),
    /// Reconcile captured spool output against a baseline revision
    Scan(commands::scan::ScanArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Job(args) => commands::job::execute(args),
        Commands::Scan(args) => commands::scan::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
