//! DBUTIL report handling.
//!
//! - [`grammar`]: one report line to its fields
//! - [`parser`]: block validation, record extraction, spool-block selection
//! - [`dbutil`]: the batch job that produces the report

pub mod dbutil;
pub mod grammar;
pub mod parser;

pub use dbutil::{render_job, DBUTIL_REPORT_FORMAT};
pub use grammar::{parse_line, ReportLine};
pub use parser::{
    extract, is_report_shape, select_report_block, split_spool, Extraction, RejectedLine,
    SPOOL_SENTINEL,
};
