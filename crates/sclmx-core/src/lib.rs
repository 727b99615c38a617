//! SCLMX Core - change detection for SCLM-managed libraries
//!
//! This crate turns the output of an SCLM DBUTIL report job into a
//! classified revision of the watched location:
//! - `FileState` records with member identity, canonical and display ordering
//! - Report extraction from JES spool output, tolerant of noise lines
//! - Reconciliation of a fresh snapshot against the previous revision
//! - Change-log projection and Markdown summaries for CI adapters
//!
//! The job-submission transport is supplied by the caller through
//! [`JobTransport`].

pub mod changelog;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod report;
pub mod revision;
pub mod transport;

pub use sclmx_core_types::schema;

// Re-export commonly used types
pub use changelog::{ChangeLog, ChangeLogEntry, ChangeLogEntryBuilder};
pub use config::{DegradedFetchPolicy, ScanConfig};
pub use errors::{ExError, ExErrorKind, Result, SclmError};
pub use model::{EditType, FileState, MemberPath, SclmLocation, Snapshot};
pub use render::render_change_summary;
pub use revision::{reconcile, reconcile_fetch, ChangeCounts, Revision};
pub use transport::{fetch_snapshot, scan, FetchStatus, FetchedSnapshot, JobTransport, SubmitOptions};
