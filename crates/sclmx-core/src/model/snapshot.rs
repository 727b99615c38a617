//! Identity-deduplicated set of file records observed at one point in time.

use std::collections::BTreeMap;

use crate::model::file_state::{sort_for_display, EditType, FileState, MemberPath};

/// Library state at one point in time, keyed by member identity.
///
/// Records are stored unclassified; classification belongs to
/// [`crate::revision::Revision`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    files: BTreeMap<MemberPath, FileState>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, keeping one entry per identity path.
    ///
    /// When the identity is already present, the record that sorts first in
    /// display order (newest change, highest version) is kept. Returns `true`
    /// if the identity was not present before.
    pub fn insert(&mut self, file: FileState) -> bool {
        let file = file.classified(EditType::Unclassified);
        match self.files.get_mut(file.path()) {
            Some(existing) => {
                if file.display_cmp(existing).is_lt() {
                    *existing = file;
                }
                false
            }
            None => {
                self.files.insert(file.path().clone(), file);
                true
            }
        }
    }

    pub fn contains(&self, path: &MemberPath) -> bool {
        self.files.contains_key(path)
    }

    pub fn get(&self, path: &MemberPath) -> Option<&FileState> {
        self.files.get(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Records in display order.
    pub fn files(&self) -> Vec<FileState> {
        let mut files: Vec<FileState> = self.files.values().cloned().collect();
        sort_for_display(&mut files);
        files
    }

    pub(crate) fn into_map(self) -> BTreeMap<MemberPath, FileState> {
        self.files
    }
}

impl FromIterator<FileState> for Snapshot {
    fn from_iter<I: IntoIterator<Item = FileState>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for file in iter {
            snapshot.insert(file);
        }
        snapshot
    }
}
