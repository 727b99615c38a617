use serde::{Deserialize, Serialize};

use crate::model::file_state::MemberPath;

/// The project/alternate/group triple a DBUTIL report is run against.
///
/// Report lines only carry type, member and change data; every record
/// extracted from one report shares this location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SclmLocation {
    pub project: String,
    pub alternate: String,
    pub group: String,
}

impl SclmLocation {
    pub fn new(
        project: impl Into<String>,
        alternate: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            alternate: alternate.into(),
            group: group.into(),
        }
    }

    /// Full member path for a type/name at this location.
    pub fn member(&self, member_type: &str, name: &str) -> MemberPath {
        MemberPath::new(
            self.project.clone(),
            self.alternate.clone(),
            self.group.clone(),
            member_type,
            name,
        )
    }
}

impl std::fmt::Display for SclmLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.project, self.alternate, self.group)
    }
}
