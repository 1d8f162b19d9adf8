//! Plain-text report rendering
//!
//! Renders a merged log collection in the familiar `svn log` shape. No
//! sorting happens here; entries are emitted in the collection's order.

use crate::model::{LogCollection, RevisionSet};
use crate::svn::constants::LOG_SEPARATOR;

/// Render the collection as a human-readable report
///
/// Per entry: a separator line, a `r<rev> | <author> | <date>` header, then
/// the raw commit message. An empty collection renders to the empty string.
pub fn render(logs: &LogCollection) -> String {
    let mut out = String::new();
    for entry in logs {
        out.push_str(LOG_SEPARATOR);
        out.push('\n');
        out.push_str(&format!(
            "r{} | {} | {}\n",
            entry.revision, entry.author, entry.date
        ));
        out.push_str(&entry.message);
        out.push('\n');
    }
    out
}

/// Render only the entries matching `revisions`
///
/// `None` renders the whole collection.
pub fn render_for(logs: &LogCollection, revisions: Option<&RevisionSet>) -> String {
    render(&logs.logs_for(revisions))
}
