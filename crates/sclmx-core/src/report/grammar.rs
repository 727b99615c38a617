//! DBUTIL report line grammar.
//!
//! One record per line, possibly surrounded by spool framing:
//!
//! ```text
//! <changeGroup>.<type>(<member>) <yyyy/MM/dd HH:mm:ss> <userID> <version>
//! ```
//!
//! The timestamp is wrapped in literal angle brackets. Anything before the
//! change group and anything after the version is ignored.

use crate::model::timestamp::has_timestamp_shape;

/// Fields of one report line, still in text form where parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub change_group: String,
    pub member_type: String,
    pub member: String,
    /// Raw `yyyy/MM/dd HH:mm:ss` text; calendar validity is not checked here.
    pub change_date: String,
    pub user_id: String,
    pub version: u64,
}

/// Split on `\r\n`, `\r` or `\n`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|l| {
        l.strip_suffix('\r')
            .unwrap_or(l)
            .split('\r')
    })
}

/// True for lines that carry no record (empty or ASCII whitespace only).
pub fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b.is_ascii_whitespace())
}

/// Match one line against the report grammar.
///
/// Returns `None` if the line does not match. A version that is not a
/// non-negative decimal integer is a mismatch.
pub fn parse_line(line: &str) -> Option<ReportLine> {
    line.match_indices('<')
        .map(|(i, _)| i)
        .filter(|&i| is_timestamp_anchor(line, i))
        .find_map(|i| match_at(line, i))
}

fn is_timestamp_anchor(line: &str, open: usize) -> bool {
    let close = open + 20;
    line.get(open + 1..close).is_some_and(has_timestamp_shape)
        && line.as_bytes().get(close) == Some(&b'>')
}

fn match_at(line: &str, open: usize) -> Option<ReportLine> {
    let (change_group, member_type, member) = parse_head(&line[..open])?;
    let (user_id, version) = parse_tail(&line[open + 21..])?;
    Some(ReportLine {
        change_group: change_group.to_string(),
        member_type: member_type.to_string(),
        member: member.to_string(),
        change_date: line[open + 1..open + 20].to_string(),
        user_id: user_id.to_string(),
        version,
    })
}

/// `... changeGroup.type(member) ` -> (changeGroup, type, member)
fn parse_head(head: &str) -> Option<(&str, &str, &str)> {
    if !head.ends_with(is_space) {
        return None;
    }
    let head = trim_space_end(trim_space_end(head).strip_suffix(')')?);
    let (before, member) = head.rsplit_once('(')?;
    if member.is_empty() || member.contains(is_space) {
        return None;
    }

    let before = trim_space_end(before);
    let token = last_token(before)?;
    let (group_part, member_type) = token.rsplit_once('.')?;
    if member_type.is_empty() {
        return None;
    }
    let change_group = if group_part.is_empty() {
        // Change group separated from `.type` by whitespace.
        last_token(trim_space_end(&before[..before.len() - token.len()]))?
    } else {
        group_part
    };
    Some((change_group, member_type, member))
}

/// ` userID version ...` -> (userID, version)
fn parse_tail(tail: &str) -> Option<(&str, u64)> {
    if !tail.starts_with(is_space) {
        return None;
    }
    let mut tokens = tail.split_ascii_whitespace();
    let user_id = tokens.next()?;
    let version = tokens.next()?;
    if !version.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((user_id, version.parse().ok()?))
}

/// Field separator. Non-ASCII spaces (U+00A0, ...) belong to the token.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn trim_space_end(text: &str) -> &str {
    text.trim_end_matches(is_space)
}

fn last_token(text: &str) -> Option<&str> {
    text.rsplit(is_space)
        .next()
        .filter(|t| !t.is_empty())
}
