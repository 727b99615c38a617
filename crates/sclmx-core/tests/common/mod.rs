use sclmx_core::model::parse_timestamp;
use sclmx_core::{FileState, MemberPath, SclmLocation, Snapshot};

pub const PROJECT: &str = "PRJ";
pub const ALTERNATE: &str = "ALT";
pub const GROUP: &str = "GRP";

/// Location used by every test fixture
#[allow(dead_code)]
pub fn location() -> SclmLocation {
    SclmLocation::new(PROJECT, ALTERNATE, GROUP)
}

/// Unclassified record at the fixture location
#[allow(dead_code)]
pub fn file(member_type: &str, name: &str, version: u64, date: &str, user: &str) -> FileState {
    file_in_group(member_type, name, version, date, user, "CG1")
}

#[allow(dead_code)]
pub fn file_in_group(
    member_type: &str,
    name: &str,
    version: u64,
    date: &str,
    user: &str,
    change_group: &str,
) -> FileState {
    FileState::new(
        MemberPath::new(PROJECT, ALTERNATE, GROUP, member_type, name),
        version,
        parse_timestamp(date).unwrap(),
        user,
        change_group,
    )
}

#[allow(dead_code)]
pub fn snapshot(files: Vec<FileState>) -> Snapshot {
    files.into_iter().collect()
}

/// One report line in the DBUTIL output format
#[allow(dead_code)]
pub fn report_line(member_type: &str, name: &str, version: u64, date: &str, user: &str) -> String {
    format!("CG1.{}({}) <{}> {} {}", member_type, name, date, user, version)
}

/// Transport output made of the given spool blocks, each closed by the sentinel
#[allow(dead_code)]
pub fn spool(blocks: &[&str]) -> String {
    blocks
        .iter()
        .map(|b| format!("{}!! END OF JES SPOOL FILE !!\n", b))
        .collect()
}
