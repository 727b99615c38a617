//! Change-log projection for CI adapters.
//!
//! A [`ChangeLog`] is the externally consumed "what changed" view of a
//! revision: one flat, string-friendly entry per Added/Edited/Deleted file,
//! in display order. Entries read back from a stored change-log are turned
//! into records again with [`ChangeLogEntryBuilder`].

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SclmError};
use crate::model::{parse_timestamp, EditType, FileState, MemberPath};
use crate::revision::Revision;

/// One changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    /// `project.alternate.group.type(name)`
    pub path: String,
    /// `ADD`, `EDIT` or `DELETE`
    pub edit_type: String,
    /// `yyyy/MM/dd HH:mm:ss`
    pub change_date: String,
    pub user_id: String,
    pub change_group: String,
    pub version: u64,
    pub project: String,
    pub alternate: String,
    pub group: String,
    #[serde(rename = "type")]
    pub member_type: String,
    pub name: String,
}

impl ChangeLogEntry {
    /// `None` for unclassified records, which never appear in a change-log.
    pub fn from_file(file: &FileState) -> Option<Self> {
        let label = file.edit_type().label()?;
        Some(Self {
            path: file.identity_path(),
            edit_type: label.to_string(),
            change_date: file.formatted_date(),
            user_id: file.change_user_id().to_string(),
            change_group: file.change_group().to_string(),
            version: file.version(),
            project: file.project().to_string(),
            alternate: file.alternate().to_string(),
            group: file.group().to_string(),
            member_type: file.member_type().to_string(),
            name: file.name().to_string(),
        })
    }

    /// Rebuild the classified record.
    ///
    /// # Errors
    ///
    /// As [`ChangeLogEntryBuilder::build`].
    pub fn to_file_state(&self) -> Result<FileState> {
        ChangeLogEntryBuilder::new()
            .project(&self.project)
            .alternate(&self.alternate)
            .group(&self.group)
            .member_type(&self.member_type)
            .name(&self.name)
            .version(self.version.to_string())
            .change_date(&self.change_date)
            .user_id(&self.user_id)
            .change_group(&self.change_group)
            .edit_type(&self.edit_type)
            .build()
    }
}

/// Changed files of a revision in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLog {
    pub entries: Vec<ChangeLogEntry>,
}

impl ChangeLog {
    pub fn from_revision(revision: &Revision) -> Self {
        Self {
            entries: revision
                .changed_only()
                .into_iter()
                .filter_map(ChangeLogEntry::from_file)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths of the affected files, in change-log order.
    pub fn affected_paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }
}

/// Rebuilds a [`FileState`] from string fields as they come out of a stored
/// change-log. Fields may be set in any order; validation happens in
/// [`ChangeLogEntryBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ChangeLogEntryBuilder {
    project: Option<String>,
    alternate: Option<String>,
    group: Option<String>,
    member_type: Option<String>,
    name: Option<String>,
    version: Option<String>,
    change_date: Option<String>,
    user_id: Option<String>,
    change_group: Option<String>,
    edit_type: EditType,
}

impl ChangeLogEntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(mut self, value: impl Into<String>) -> Self {
        self.project = Some(value.into());
        self
    }

    pub fn alternate(mut self, value: impl Into<String>) -> Self {
        self.alternate = Some(value.into());
        self
    }

    pub fn group(mut self, value: impl Into<String>) -> Self {
        self.group = Some(value.into());
        self
    }

    pub fn member_type(mut self, value: impl Into<String>) -> Self {
        self.member_type = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn change_date(mut self, value: impl Into<String>) -> Self {
        self.change_date = Some(value.into());
        self
    }

    pub fn user_id(mut self, value: impl Into<String>) -> Self {
        self.user_id = Some(value.into());
        self
    }

    pub fn change_group(mut self, value: impl Into<String>) -> Self {
        self.change_group = Some(value.into());
        self
    }

    /// `ADD`, `EDIT` or `DELETE`; anything else leaves the record unclassified.
    pub fn edit_type(mut self, label: &str) -> Self {
        self.edit_type = EditType::from_label(label);
        self
    }

    /// # Errors
    ///
    /// - `MissingField` if any field other than the edit type was never set
    /// - `InvalidVersion` if the version is not a non-negative integer
    /// - `InvalidTimestamp` if the change date is not `yyyy/MM/dd HH:mm:ss`
    pub fn build(self) -> Result<FileState> {
        let version_text = required(self.version, "version")?;
        let version = version_text
            .trim()
            .parse::<u64>()
            .map_err(|_| SclmError::InvalidVersion {
                value: version_text.clone(),
            })?;
        let change_date = parse_timestamp(&required(self.change_date, "change_date")?)?;

        let path = MemberPath::new(
            required(self.project, "project")?,
            required(self.alternate, "alternate")?,
            required(self.group, "group")?,
            required(self.member_type, "type")?,
            required(self.name, "name")?,
        );
        Ok(FileState::new(
            path,
            version,
            change_date,
            required(self.user_id, "user_id")?,
            required(self.change_group, "change_group")?,
        )
        .classified(self.edit_type))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value.ok_or(SclmError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> ChangeLogEntryBuilder {
        ChangeLogEntryBuilder::new()
            .project("P")
            .alternate("A")
            .group("G")
            .member_type("COBOL")
            .name("PGM")
            .version("4")
            .change_date("2024/05/06 07:08:09")
            .user_id("U1")
            .change_group("CG")
    }

    #[test]
    fn test_builder_produces_classified_record() {
        let file = full_builder().edit_type("EDIT").build().unwrap();
        assert_eq!(file.edit_type(), EditType::Edited);
        assert_eq!(file.version(), 4);
        assert_eq!(file.identity_path(), "P.A.G.COBOL(PGM)");
    }

    #[test]
    fn test_builder_unknown_edit_type_is_unclassified() {
        let file = full_builder().edit_type("MOVE").build().unwrap();
        assert_eq!(file.edit_type(), EditType::Unclassified);
    }

    #[test]
    fn test_builder_reports_missing_field() {
        let err = ChangeLogEntryBuilder::new()
            .version("1")
            .change_date("2024/05/06 07:08:09")
            .build()
            .unwrap_err();
        assert_eq!(err, SclmError::MissingField { field: "project" });
    }

    #[test]
    fn test_builder_rejects_bad_version_and_date() {
        assert!(matches!(
            full_builder().version("-1").build(),
            Err(SclmError::InvalidVersion { .. })
        ));
        assert!(matches!(
            full_builder().change_date("06/05/2024").build(),
            Err(SclmError::InvalidTimestamp { .. })
        ));
    }
}
