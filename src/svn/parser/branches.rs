//! Parser for `svn ls` output against the branches directory

use super::Parser;

impl Parser {
    /// Parse `svn ls <branches-url>` output into bare branch names
    ///
    /// Output is one entry per line; directories carry a trailing slash:
    ///
    /// ```text
    /// feature-x/
    /// release-1.2/
    /// notes.txt
    /// ```
    ///
    /// Only directories are branches; plain files under the branches
    /// directory are ignored.
    pub fn parse_branch_list(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| {
                let line = line.trim_end();
                line.strip_suffix('/').map(|name| name.to_string())
            })
            .filter(|name| !name.is_empty())
            .collect()
    }
}
