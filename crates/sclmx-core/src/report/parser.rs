//! Report validation, extraction and spool-block selection.

use std::time::Instant;

use tracing::{debug, warn};

use crate::errors::{ExError, SclmError};
use crate::model::{parse_timestamp, FileState, SclmLocation, Snapshot};
use crate::report::grammar::{is_blank, parse_line, split_lines, ReportLine};
use crate::{log_op_end, log_op_start};

/// Line that closes every JES spool file in transport output.
pub const SPOOL_SENTINEL: &str = "!! END OF JES SPOOL FILE !!";

/// True if every non-blank line of `text` matches the report grammar.
///
/// Empty or all-blank text is accepted.
pub fn is_report_shape(text: &str) -> bool {
    split_lines(text)
        .filter(|line| !is_blank(line))
        .all(|line| parse_line(line).is_some())
}

/// A report line that matched the grammar but could not become a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based line number within the report block
    pub line_number: usize,
    pub text: String,
    pub error: SclmError,
}

/// Records extracted from one report block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub snapshot: Snapshot,
    pub rejected: Vec<RejectedLine>,
}

/// Build file records from a report block.
///
/// Each matching line becomes a record at `location`. When `type_filter` is
/// non-empty only records whose type is listed are kept. Lines that do not
/// match the grammar are skipped; callers gate on [`is_report_shape`] first.
/// A line whose timestamp names an impossible date is dropped, logged and
/// listed in [`Extraction::rejected`].
pub fn extract(text: &str, location: &SclmLocation, type_filter: &[String]) -> Extraction {
    let start = Instant::now();
    log_op_start!("extract_report", project = %location.project, group = %location.group);

    let mut extraction = Extraction::default();
    for (index, raw) in split_lines(text).enumerate() {
        if is_blank(raw) {
            continue;
        }
        let Some(line) = parse_line(raw) else {
            continue;
        };
        if !type_filter.is_empty() && !type_filter.iter().any(|t| *t == line.member_type) {
            continue;
        }
        match to_file_state(&line, location) {
            Ok(file) => {
                extraction.snapshot.insert(file);
            }
            Err(error) => {
                let ex_err = ExError::from(error.clone())
                    .with_op("extract_report")
                    .with_member(location.member(&line.member_type, &line.member).to_string())
                    .with_line(index + 1);
                warn!(
                    line_number = index + 1,
                    member = %line.member,
                    err.code = ex_err.code(),
                    error = %ex_err,
                    "dropping report line with unusable timestamp"
                );
                extraction.rejected.push(RejectedLine {
                    line_number: index + 1,
                    text: raw.to_string(),
                    error,
                });
            }
        }
    }

    log_op_end!(
        "extract_report",
        duration_ms = start.elapsed().as_millis() as u64,
        file_count = extraction.snapshot.len(),
        rejected = extraction.rejected.len()
    );
    extraction
}

fn to_file_state(line: &ReportLine, location: &SclmLocation) -> Result<FileState, SclmError> {
    let change_date = parse_timestamp(&line.change_date)?;
    Ok(FileState::new(
        location.member(&line.member_type, &line.member),
        line.version,
        change_date,
        line.user_id.clone(),
        line.change_group.clone(),
    ))
}

/// Split transport output into spool blocks.
///
/// Blocks are separated by [`SPOOL_SENTINEL`] followed by a line
/// terminator. Blank blocks after the last sentinel are discarded; output
/// made only of sentinels and blank lines yields no blocks at all.
pub fn split_spool(output: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut block_start = 0;
    let mut search_from = 0;

    while let Some(found) = output[search_from..].find(SPOOL_SENTINEL) {
        let sentinel_at = search_from + found;
        let after = sentinel_at + SPOOL_SENTINEL.len();
        let rest = &output[after..];
        let terminator = if rest.starts_with("\r\n") {
            2
        } else if rest.starts_with('\r') || rest.starts_with('\n') {
            1
        } else {
            0
        };

        if terminator == 0 {
            search_from = after;
            continue;
        }
        blocks.push(&output[block_start..sentinel_at]);
        block_start = after + terminator;
        search_from = block_start;
    }
    blocks.push(&output[block_start..]);

    // A blank tail after the last sentinel is transport framing, not a spool file.
    while blocks.len() > 1 && blocks.last().is_some_and(|b| is_blank(b)) {
        blocks.pop();
    }
    if blocks.len() == 1 && is_blank(blocks[0]) && !output.is_empty() {
        blocks.clear();
    }
    blocks
}

/// First spool block that passes [`is_report_shape`], with its index.
pub fn select_report_block(output: &str) -> Option<(usize, &str)> {
    let blocks = split_spool(output);
    debug!(block_count = blocks.len(), "scanning spool blocks for DBUTIL report");
    blocks
        .into_iter()
        .enumerate()
        .find(|(_, block)| is_report_shape(block))
}
