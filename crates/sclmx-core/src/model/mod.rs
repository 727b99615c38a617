pub mod file_state;
pub mod location;
pub mod snapshot;
pub mod timestamp;

pub use file_state::{sort_for_display, EditType, FileState, MemberPath};
pub use location::SclmLocation;
pub use snapshot::Snapshot;
pub use timestamp::{format_timestamp, parse_timestamp, Timestamp, TIMESTAMP_FORMAT};
