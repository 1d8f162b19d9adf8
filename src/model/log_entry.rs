//! Log entry data model

/// One svn commit record, as observed on a particular branch
///
/// The same revision number can appear on several branches (after a merge,
/// for instance); each observation is a distinct entry distinguished by
/// `branch_path`. Entries are not modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogEntry {
    /// Repository-wide revision number
    pub revision: u64,

    /// Author name (may be empty, or svn's `(no author)` placeholder)
    pub author: String,

    /// Timestamp as printed by svn (opaque text)
    pub date: String,

    /// Full commit message
    pub message: String,

    /// URL of the branch (or trunk) this entry was retrieved from
    pub branch_path: String,
}

impl LogEntry {
    /// True when the entry was observed on trunk rather than a branch
    pub fn is_trunk(&self) -> bool {
        self.branch_path.ends_with("/trunk")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> LogEntry {
        LogEntry {
            revision: 750,
            author: "alice".to_string(),
            date: "2024-01-29 15:30:12 +0900 (Mon, 29 Jan 2024)".to_string(),
            message: "Fix the frobnicator".to_string(),
            branch_path: "https://svn.example.com/repo/trunk".to_string(),
        }
    }

    #[test]
    fn test_is_trunk() {
        assert!(sample_entry().is_trunk());

        let branched = LogEntry {
            branch_path: "https://svn.example.com/repo/branches/feature-x".to_string(),
            ..sample_entry()
        };
        assert!(!branched.is_trunk());
    }
}
