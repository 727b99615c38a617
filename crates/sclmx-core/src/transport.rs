//! Seam to the job-submission transport.
//!
//! The transport (FTP/JES interface, z/OSMF, a captured spool file in tests)
//! is not part of this crate. It submits a job and writes the job's spool
//! output to a sink; this module renders the job, picks the DBUTIL report out
//! of the spool, and tags the result with how the fetch went.

use std::fmt;
use std::io::Write;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::errors::Result;
use crate::model::Snapshot;
use crate::report::grammar::is_blank;
use crate::report::{extract, render_job, select_report_block, RejectedLine};
use crate::revision::{reconcile_fetch, Revision};
use crate::{log_op_end, log_op_start};

/// Flags passed alongside the job text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Write the job's spool output to the sink
    pub capture_output: bool,
    /// Seconds to wait for completion; 0 waits without limit
    pub wait_seconds: u32,
    /// Purge the job's spool output after capture
    pub delete_output: bool,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            capture_output: true,
            wait_seconds: 0,
            delete_output: true,
        }
    }
}

/// Blocking job submission.
pub trait JobTransport {
    /// Submit `job` and write its output to `output`. Returns `false` if the
    /// job could not be submitted or did not complete.
    fn submit(&mut self, job: &[u8], options: &SubmitOptions, output: &mut dyn Write) -> bool;
}

/// How a fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// A report block was found (possibly with no records)
    Report,
    /// The transport reported failure
    TransportFailed,
    /// Output was not valid UTF-8
    InvalidEncoding,
    /// No spool block had the report shape, or the output was blank
    NoReportBlock,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FetchStatus::Report => "report",
            FetchStatus::TransportFailed => "transport failed",
            FetchStatus::InvalidEncoding => "output is not valid UTF-8",
            FetchStatus::NoReportBlock => "no DBUTIL report in spool output",
        };
        f.write_str(text)
    }
}

/// Snapshot plus the status of the fetch that produced it.
///
/// The snapshot is empty unless `status` is [`FetchStatus::Report`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedSnapshot {
    pub status: FetchStatus,
    pub snapshot: Snapshot,
    pub rejected: Vec<RejectedLine>,
}

impl FetchedSnapshot {
    pub fn degraded(status: FetchStatus) -> Self {
        Self {
            status,
            snapshot: Snapshot::new(),
            rejected: Vec::new(),
        }
    }
}

/// Parse raw transport output for `config`'s location.
pub fn snapshot_from_output(output: &[u8], config: &ScanConfig) -> FetchedSnapshot {
    let Ok(text) = std::str::from_utf8(output) else {
        warn!("transport output is not valid UTF-8");
        return FetchedSnapshot::degraded(FetchStatus::InvalidEncoding);
    };
    if is_blank(text) {
        return FetchedSnapshot::degraded(FetchStatus::NoReportBlock);
    }
    let Some((index, block)) = select_report_block(text) else {
        warn!("no spool block matched the DBUTIL report shape");
        return FetchedSnapshot::degraded(FetchStatus::NoReportBlock);
    };
    debug!(block = index, "selected DBUTIL report block");

    let extraction = extract(block, &config.location(), &config.types);
    FetchedSnapshot {
        status: FetchStatus::Report,
        snapshot: extraction.snapshot,
        rejected: extraction.rejected,
    }
}

/// Run the DBUTIL job through `transport` and extract the report.
pub fn fetch_snapshot<T>(transport: &mut T, config: &ScanConfig) -> FetchedSnapshot
where
    T: JobTransport + ?Sized,
{
    let start = Instant::now();
    log_op_start!(
        "fetch_snapshot",
        project = %config.project,
        alternate = %config.alternate,
        group = %config.group
    );

    let job = render_job(&config.job_card, &config.location());
    let mut output = Vec::new();
    let fetched = if transport.submit(job.as_bytes(), &SubmitOptions::default(), &mut output) {
        snapshot_from_output(&output, config)
    } else {
        warn!("DBUTIL job submission failed");
        FetchedSnapshot::degraded(FetchStatus::TransportFailed)
    };

    log_op_end!(
        "fetch_snapshot",
        duration_ms = start.elapsed().as_millis() as u64,
        status = %fetched.status,
        file_count = fetched.snapshot.len()
    );
    fetched
}

/// Fetch the current state and reconcile it against `baseline`.
///
/// # Errors
///
/// `SclmError::RemoteUnavailable` when the fetch degraded, a baseline is
/// given and `config.degraded_fetch` is `Reject`.
pub fn scan<T>(transport: &mut T, config: &ScanConfig, baseline: Option<Revision>) -> Result<Revision>
where
    T: JobTransport + ?Sized,
{
    let fetched = fetch_snapshot(transport, config);
    reconcile_fetch(fetched, baseline, config.degraded_fetch, &config.types)
}
