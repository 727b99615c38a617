//! Canonical change-timestamp codec.
//!
//! SCLM prints change dates as `yyyy/MM/dd HH:mm:ss` with no zone. That one
//! pattern is used for parsing report lines, for display, and for the
//! persisted revision form.

use chrono::NaiveDateTime;

use crate::errors::{Result, SclmError};

/// Change timestamp as printed by the library system (no timezone).
pub type Timestamp = NaiveDateTime;

/// `chrono` format string for the canonical pattern.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Human-facing spelling of [`TIMESTAMP_FORMAT`].
pub const TIMESTAMP_PATTERN: &str = "yyyy/MM/dd HH:mm:ss";

const TIMESTAMP_LEN: usize = 19;

/// True if `text` has the exact shape `dddd/dd/dd dd:dd:dd`.
///
/// Only the character classes are checked; calendar validity is left to
/// [`parse_timestamp`].
pub fn has_timestamp_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != TIMESTAMP_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'/',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

/// Parse a canonical `yyyy/MM/dd HH:mm:ss` timestamp.
///
/// # Errors
///
/// `SclmError::InvalidTimestamp` if the text does not have the fixed shape or
/// names a date/time that does not exist (month 13, Feb 30, hour 24, ...).
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    if !has_timestamp_shape(text) {
        return Err(SclmError::InvalidTimestamp {
            value: text.to_string(),
            reason: format!("expected {}", TIMESTAMP_PATTERN),
        });
    }
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| {
        SclmError::InvalidTimestamp {
            value: text.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Render a timestamp in the canonical pattern.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter keeping timestamps in canonical text form on the wire.
pub mod canonical {
    use super::{format_timestamp, parse_timestamp, Timestamp};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_timestamp(&text).map_err(serde::de::Error::custom)
    }
}
