//! svn output parser
//!
//! Parses the output from svn commands into structured data.

mod branches;
mod log;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for the entry header line in plain `svn log` output
/// Format: `r<revision> | <author> | <date> | <N> line(s)`
/// Example: `r750 | alice | 2024-01-29 15:30:12 +0900 (Mon, 29 Jan 2024) | 2 lines`
///
/// Groups:
/// 1. revision (digits after the leading `r`)
/// 2. author (may be empty or `(no author)`)
/// 3. date (opaque text, passed through verbatim)
/// 4. message line count
static LOG_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r(\d+) \| (.*) \| (.*) \| (\d+) lines?$").expect("Invalid log header regex")
});

/// Parser for svn command output
pub struct Parser;
