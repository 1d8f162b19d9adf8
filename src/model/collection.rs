//! Merged log collection

use super::{LogEntry, RevisionSet};

/// An ordered sequence of log entries merged from several branches
///
/// Entries are not unique per revision: the same revision observed on two
/// branches yields two entries. Order is whatever the producer appended
/// until [`sort_descending`](Self::sort_descending) is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogCollection {
    entries: Vec<LogEntry>,
}

impl LogCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn extend<I: IntoIterator<Item = LogEntry>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// Sort entries by revision number, descending
    ///
    /// Numeric comparison; a stable sort, so entries sharing a revision keep
    /// their relative order.
    pub fn sort_descending(&mut self) {
        self.entries.sort_by(|a, b| b.revision.cmp(&a.revision));
    }

    /// Entries matching the requested revisions
    ///
    /// `None` means no filter: the whole collection is returned unchanged.
    pub fn logs_for(&self, revisions: Option<&RevisionSet>) -> LogCollection {
        match revisions {
            None => self.clone(),
            Some(set) => LogCollection {
                entries: self
                    .entries
                    .iter()
                    .filter(|entry| set.contains(entry.revision))
                    .cloned()
                    .collect(),
            },
        }
    }
}

impl From<Vec<LogEntry>> for LogCollection {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for LogCollection {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogCollection {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
