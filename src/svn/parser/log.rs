//! Log output parser (plain `svn log`)

use super::super::constants::LOG_SEPARATOR;
use super::{LOG_HEADER_REGEX, Parser};
use crate::model::LogEntry;

impl Parser {
    /// Parse plain `svn log` output into a list of LogEntries
    ///
    /// The document is a sequence of blocks, each delimited by a 72-dash
    /// separator line:
    ///
    /// ```text
    /// ------------------------------------------------------------------------
    /// r750 | alice | 2024-01-29 15:30:12 +0900 (Mon, 29 Jan 2024) | 2 lines
    ///
    /// first message line
    /// second message line
    /// ------------------------------------------------------------------------
    /// ```
    ///
    /// The header's line count determines how many message lines belong to the
    /// entry, so commit messages containing dash runs cannot be mistaken for
    /// separators. Malformed blocks are skipped rather than failing the whole
    /// document: an empty or unparseable history simply yields no entries.
    ///
    /// Every returned entry carries `branch_path` as the source it was
    /// observed on.
    pub fn parse_log(output: &str, branch_path: &str) -> Vec<LogEntry> {
        let mut entries = Vec::new();
        let mut lines = output.lines();

        // Anything before the first separator is noise.
        skip_to_separator(&mut lines);

        while let Some(header) = lines.next() {
            let Some(caps) = LOG_HEADER_REGEX.captures(header) else {
                // Malformed block: resynchronize at the next separator.
                skip_to_separator(&mut lines);
                continue;
            };

            let Ok(revision) = caps[1].parse::<u64>() else {
                skip_to_separator(&mut lines);
                continue;
            };
            let author = caps[2].to_string();
            let date = caps[3].to_string();
            let line_count: usize = caps[4].parse().unwrap_or(0);

            // Blank line between the header and the message body.
            lines.next();

            let mut message = String::new();
            for i in 0..line_count {
                match lines.next() {
                    Some(line) => {
                        if i > 0 {
                            message.push('\n');
                        }
                        message.push_str(line);
                    }
                    None => break,
                }
            }

            entries.push(LogEntry {
                revision,
                author,
                date,
                message,
                branch_path: branch_path.to_string(),
            });

            // Consume the separator closing this block (tolerates an
            // understated line count by scanning forward).
            skip_to_separator(&mut lines);
        }

        entries
    }
}

/// Advance past the next separator line, consuming it
fn skip_to_separator(lines: &mut std::str::Lines<'_>) {
    for line in lines.by_ref() {
        if line == LOG_SEPARATOR {
            break;
        }
    }
}
