//! Scan command: reconcile a captured spool file against the last revision

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use sclmx_core::{
    render_change_summary, scan, ChangeLog, JobTransport, Revision, ScanConfig, SubmitOptions,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown summary
    Text,
    /// Change-log JSON
    Json,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Scan configuration (TOML)
    #[arg(long)]
    pub config: PathBuf,

    /// Spool output captured from a DBUTIL job run
    #[arg(long)]
    pub spool: PathBuf,

    /// Revision JSON written by the previous scan
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Where to write the new revision JSON
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Drop deleted files before printing and writing the revision
    #[arg(long)]
    pub drop_deleted: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Replays a spool file as the output of the submitted job.
struct SpoolFileTransport<'a> {
    path: &'a Path,
}

impl JobTransport for SpoolFileTransport<'_> {
    fn submit(&mut self, _job: &[u8], _options: &SubmitOptions, output: &mut dyn Write) -> bool {
        match fs::read(self.path) {
            Ok(bytes) => output.write_all(&bytes).is_ok(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read spool file");
                false
            }
        }
    }
}

pub fn execute(args: ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScanConfig::load(&args.config)?;

    let baseline = match &args.baseline {
        Some(path) => Some(load_revision(path)?),
        None => None,
    };

    let mut transport = SpoolFileTransport { path: &args.spool };
    let mut revision = scan(&mut transport, &config, baseline)?;
    if args.drop_deleted {
        revision.remove_deleted();
    }

    match args.format {
        OutputFormat::Text => print!("{}", render_change_summary(&revision)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&ChangeLog::from_revision(&revision))?
        ),
    }

    if let Some(out) = &args.out {
        fs::write(out, serde_json::to_string_pretty(&revision)?)?;
    }
    Ok(())
}

fn load_revision(path: &Path) -> Result<Revision, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read baseline {}: {}", path.display(), e))?;
    let revision: Revision = serde_json::from_str(&text)
        .map_err(|e| format!("invalid baseline {}: {}", path.display(), e))?;
    Ok(revision)
}
