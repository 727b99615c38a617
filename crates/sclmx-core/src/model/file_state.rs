use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SclmError};
use crate::model::timestamp::{self, Timestamp};

/// Library location of one SCLM member.
///
/// The five parts jointly form the member's identity. Two records with the
/// same `MemberPath` are the same file regardless of version, date or user;
/// this is the key used for deduplication, set membership and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberPath {
    /// SCLM project (`@@FLMPRJ`)
    pub project: String,
    /// Alternate project definition (`@@FLMALT`)
    pub alternate: String,
    /// SCLM group (`@@FLMGRP`)
    pub group: String,
    /// Member type (`@@FLMTYP`)
    #[serde(rename = "type")]
    pub member_type: String,
    /// Member name (`@@FLMMBR`)
    pub name: String,
}

impl MemberPath {
    pub fn new(
        project: impl Into<String>,
        alternate: impl Into<String>,
        group: impl Into<String>,
        member_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            alternate: alternate.into(),
            group: group.into(),
            member_type: member_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for MemberPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}({})",
            self.project, self.alternate, self.group, self.member_type, self.name
        )
    }
}

/// Classification of a record relative to the baseline revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditType {
    Added,
    Edited,
    Deleted,
    /// Not classified yet, or present in the baseline with identical fields
    #[default]
    Unclassified,
}

impl EditType {
    /// Upper-case label used in change lines and persisted change-logs.
    ///
    /// `None` for `Unclassified`, which has no change label.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            EditType::Added => Some("ADD"),
            EditType::Edited => Some("EDIT"),
            EditType::Deleted => Some("DELETE"),
            EditType::Unclassified => None,
        }
    }

    /// Inverse of [`EditType::label`]; unknown text maps to `Unclassified`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ADD" => EditType::Added,
            "EDIT" => EditType::Edited,
            "DELETE" => EditType::Deleted,
            _ => EditType::Unclassified,
        }
    }

    /// True for Added, Edited and Deleted.
    pub fn is_change(&self) -> bool {
        !matches!(self, EditType::Unclassified)
    }
}

/// One SCLM member at one version.
///
/// Immutable once built. Classification during reconciliation produces a new
/// value through [`FileState::classified`] instead of mutating this one.
///
/// Derived `PartialEq` is full structural equality (every field, including
/// the edit type). Identity comparison is [`FileState::same_member`]; the
/// field-level order is [`FileState::canonical_cmp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileState {
    #[serde(flatten)]
    path: MemberPath,
    /// Member version (`@@FLMMVR`)
    version: u64,
    /// Change date and time (`@@FLMCD4` + `@@FLMCTM`)
    #[serde(with = "timestamp::canonical")]
    change_date: Timestamp,
    /// Change user ID (`@@FLMCUS`)
    change_user_id: String,
    /// Change group (`@@FLMCLV`)
    change_group: String,
    #[serde(default)]
    edit_type: EditType,
}

impl FileState {
    /// Create an unclassified record.
    pub fn new(
        path: MemberPath,
        version: u64,
        change_date: Timestamp,
        change_user_id: impl Into<String>,
        change_group: impl Into<String>,
    ) -> Self {
        Self {
            path,
            version,
            change_date,
            change_user_id: change_user_id.into(),
            change_group: change_group.into(),
            edit_type: EditType::Unclassified,
        }
    }

    /// Same record with its classification replaced.
    pub fn classified(self, edit_type: EditType) -> Self {
        Self { edit_type, ..self }
    }

    pub fn path(&self) -> &MemberPath {
        &self.path
    }

    pub fn project(&self) -> &str {
        &self.path.project
    }

    pub fn alternate(&self) -> &str {
        &self.path.alternate
    }

    pub fn group(&self) -> &str {
        &self.path.group
    }

    pub fn member_type(&self) -> &str {
        &self.path.member_type
    }

    pub fn name(&self) -> &str {
        &self.path.name
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn change_date(&self) -> &Timestamp {
        &self.change_date
    }

    pub fn change_user_id(&self) -> &str {
        &self.change_user_id
    }

    pub fn change_group(&self) -> &str {
        &self.change_group
    }

    pub fn edit_type(&self) -> EditType {
        self.edit_type
    }

    /// `project.alternate.group.type(name)`
    pub fn identity_path(&self) -> String {
        self.path.to_string()
    }

    /// True if both records locate the same member.
    pub fn same_member(&self, other: &FileState) -> bool {
        self.path == other.path
    }

    /// Field-level total order: project, alternate, group, type, name,
    /// version, change date, user, change group. Ignores the edit type.
    ///
    /// `Equal` means the two records are the same file with no change.
    pub fn canonical_cmp(&self, other: &FileState) -> Ordering {
        self.path
            .cmp(&other.path)
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.change_date.cmp(&other.change_date))
            .then_with(|| self.change_user_id.cmp(&other.change_user_id))
            .then_with(|| self.change_group.cmp(&other.change_group))
    }

    /// Display order: newest change first, then type, name, version
    /// (highest first), user and change group.
    ///
    /// Records from different locations that tie on all of those fall back
    /// to [`FileState::canonical_cmp`], so the order is total.
    pub fn display_cmp(&self, other: &FileState) -> Ordering {
        other
            .change_date
            .cmp(&self.change_date)
            .then_with(|| self.path.member_type.cmp(&other.path.member_type))
            .then_with(|| self.path.name.cmp(&other.path.name))
            .then_with(|| other.version.cmp(&self.version))
            .then_with(|| self.change_user_id.cmp(&other.change_user_id))
            .then_with(|| self.change_group.cmp(&other.change_group))
            .then_with(|| self.canonical_cmp(other))
    }

    /// Change date in the canonical text form.
    pub fn formatted_date(&self) -> String {
        timestamp::format_timestamp(&self.change_date)
    }

    /// `EDIT: [path] group <date> | user, ver.:N`
    ///
    /// # Errors
    ///
    /// `SclmError::Unclassified` if the record carries no change label.
    pub fn describe(&self) -> Result<String> {
        let label = self
            .edit_type
            .label()
            .ok_or_else(|| SclmError::Unclassified {
                path: self.identity_path(),
            })?;
        Ok(format!(
            "{}: [{}] {} <{}> | {}, ver.:{}",
            label,
            self.path,
            self.change_group,
            self.formatted_date(),
            self.change_user_id,
            self.version
        ))
    }
}

/// Sort records into display order in place.
pub fn sort_for_display(files: &mut [FileState]) {
    files.sort_by(|a, b| a.display_cmp(b));
}
