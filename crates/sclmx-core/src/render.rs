//! Markdown summary of a reconciled revision.

use crate::revision::Revision;

/// Render a Markdown summary of `revision`: counts followed by one
/// `describe()` line per changed file, in display order.
///
/// Informational only; the structured form is the change-log.
pub fn render_change_summary(revision: &Revision) -> String {
    let mut out = String::new();
    out.push_str("## SCLM Changes\n\n");

    let counts = revision.counts();
    out.push_str(&format!(
        "| Added | Edited | Deleted | Unchanged |\n\
         |---|---|---|---|\n\
         | {} | {} | {} | {} |\n\n",
        counts.added, counts.edited, counts.deleted, counts.unchanged
    ));

    if !revision.types().is_empty() {
        out.push_str(&format!("**Types**: {}\n\n", revision.types().join(", ")));
    }

    if counts.changed() == 0 {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str("### Changed Files\n\n");
    for line in revision
        .changed_only()
        .into_iter()
        .filter_map(|file| file.describe().ok())
    {
        out.push_str(&format!("- `{}`\n", line));
    }
    out
}
