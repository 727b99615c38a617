//! Snapshot-vs-baseline reconciliation.
//!
//! Set algebra is over member identity:
//!
//! - **added**: in remote, identity absent from baseline
//! - **common**: in remote, identity present in baseline; `Unclassified` when
//!   the baseline record is field-for-field identical, `Edited` otherwise
//! - **deleted**: in baseline, identity absent from remote
//!
//! The union is sorted into display order.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::config::DegradedFetchPolicy;
use crate::errors::{Result, SclmError};
use crate::model::{sort_for_display, EditType, FileState, MemberPath, Snapshot};
use crate::revision::Revision;
use crate::transport::{FetchStatus, FetchedSnapshot};
use crate::{log_op_end, log_op_error, log_op_start};

/// Classify `remote` against `baseline` and build the next revision.
///
/// The baseline is consumed; only its file list is needed. Without a
/// baseline every remote record is `Added`.
pub fn reconcile(remote: Snapshot, baseline: Option<Revision>, types: &[String]) -> Revision {
    let start = Instant::now();
    log_op_start!(
        "reconcile",
        file_count = remote.len(),
        has_baseline = baseline.is_some()
    );

    let remote = remote.into_map();
    let mut files = Vec::with_capacity(remote.len());

    match baseline {
        None => {
            files.extend(
                remote
                    .into_values()
                    .map(|f| f.classified(EditType::Added)),
            );
        }
        Some(baseline) => {
            let base: BTreeMap<MemberPath, FileState> = baseline
                .into_files()
                .into_iter()
                .map(|f| (f.path().clone(), f))
                .collect();

            for (path, file) in &base {
                if !remote.contains_key(path) {
                    files.push(file.clone().classified(EditType::Deleted));
                }
            }

            for (path, file) in remote {
                let edit_type = match base.get(&path) {
                    None => EditType::Added,
                    Some(prev) if prev.canonical_cmp(&file) == Ordering::Equal => {
                        EditType::Unclassified
                    }
                    Some(_) => EditType::Edited,
                };
                files.push(file.classified(edit_type));
            }
        }
    }

    sort_for_display(&mut files);
    let revision = Revision::from_parts(files, types.to_vec());

    let counts = revision.counts();
    log_op_end!(
        "reconcile",
        duration_ms = start.elapsed().as_millis() as u64,
        added = counts.added,
        edited = counts.edited,
        deleted = counts.deleted,
        unchanged = counts.unchanged
    );
    revision
}

/// Reconcile a fetch result, honouring `policy` when the fetch degraded.
///
/// A degraded fetch (transport failure, undecodable output, no report block)
/// with no baseline yields an empty revision. With a baseline, `Reject`
/// fails and `Reconcile` proceeds with an empty remote snapshot, which marks
/// every baseline file `Deleted`.
///
/// # Errors
///
/// `SclmError::RemoteUnavailable` when the fetch degraded, a baseline exists
/// and the policy is `Reject`.
pub fn reconcile_fetch(
    fetched: FetchedSnapshot,
    baseline: Option<Revision>,
    policy: DegradedFetchPolicy,
    types: &[String],
) -> Result<Revision> {
    if fetched.status != FetchStatus::Report
        && baseline.is_some()
        && policy == DegradedFetchPolicy::Reject
    {
        let err = SclmError::RemoteUnavailable {
            status: fetched.status.to_string(),
        };
        log_op_error!("reconcile", err, duration_ms = 0u64);
        return Err(err);
    }
    Ok(reconcile(fetched.snapshot, baseline, types))
}
