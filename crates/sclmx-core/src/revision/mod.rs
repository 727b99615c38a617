//! Reconciled revisions of an SCLM location.
//!
//! A [`Revision`] is built once by [`reconcile`] from a fresh snapshot and
//! the previous revision, and is read-only afterwards except for
//! [`Revision::remove_deleted`].
//!
//! ## Persistence
//!
//! `Revision` serializes through [`RevisionState`]; deserialization rejects
//! duplicate identity paths so a persisted revision can always be used as
//! the next baseline.

pub mod reconcile;

pub use reconcile::{reconcile, reconcile_fetch};

use std::collections::BTreeSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::{Result, SclmError};
use crate::model::{sort_for_display, EditType, FileState};
use crate::{log_op_end, log_op_start};

/// Per-classification record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub added: usize,
    pub edited: usize,
    pub deleted: usize,
    pub unchanged: usize,
}

impl ChangeCounts {
    pub fn changed(&self) -> usize {
        self.added + self.edited + self.deleted
    }
}

/// Display-ordered, fully classified file list plus the type filter it was
/// built under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RevisionState", into = "RevisionState")]
pub struct Revision {
    files: Vec<FileState>,
    types: Vec<String>,
}

/// Wire form of a [`Revision`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionState {
    pub files: Vec<FileState>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl TryFrom<RevisionState> for Revision {
    type Error = SclmError;

    fn try_from(state: RevisionState) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for file in &state.files {
            if !seen.insert(file.path()) {
                return Err(SclmError::DuplicateMember {
                    path: file.identity_path(),
                });
            }
        }
        let mut files = state.files;
        sort_for_display(&mut files);
        Ok(Revision::from_parts(files, state.types))
    }
}

impl From<Revision> for RevisionState {
    fn from(revision: Revision) -> Self {
        RevisionState {
            files: revision.files,
            types: revision.types,
        }
    }
}

impl Revision {
    /// Caller guarantees unique identities and display order.
    pub(crate) fn from_parts(files: Vec<FileState>, types: Vec<String>) -> Self {
        Self { files, types }
    }

    /// Every record in display order, including unchanged ones.
    pub fn files(&self) -> &[FileState] {
        &self.files
    }

    pub fn into_files(self) -> Vec<FileState> {
        self.files
    }

    /// Type filter in effect when this revision was fetched.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Added, Edited and Deleted records in display order.
    pub fn changed_only(&self) -> Vec<&FileState> {
        self.files
            .iter()
            .filter(|f| f.edit_type().is_change())
            .collect()
    }

    /// Drop `Deleted` records. Idempotent. Returns how many were dropped.
    pub fn remove_deleted(&mut self) -> usize {
        let start = Instant::now();
        log_op_start!("remove_deleted", file_count = self.files.len());

        let before = self.files.len();
        self.files.retain(|f| f.edit_type() != EditType::Deleted);
        let removed = before - self.files.len();

        log_op_end!(
            "remove_deleted",
            duration_ms = start.elapsed().as_millis() as u64,
            deleted = removed
        );
        removed
    }

    pub fn counts(&self) -> ChangeCounts {
        self.files
            .iter()
            .fold(ChangeCounts::default(), |mut c, f| {
                match f.edit_type() {
                    EditType::Added => c.added += 1,
                    EditType::Edited => c.edited += 1,
                    EditType::Deleted => c.deleted += 1,
                    EditType::Unclassified => c.unchanged += 1,
                }
                c
            })
    }

    /// SHA-256 hex digest of the canonical JSON of the ordered file list.
    ///
    /// Equal digests mean equal file lists, classifications included.
    ///
    /// # Errors
    ///
    /// `SclmError::Serialization` if the file list cannot be serialized.
    pub fn digest(&self) -> Result<String> {
        let canonical = serde_json::to_string(&self.files)?;
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}
