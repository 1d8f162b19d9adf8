//! Requested revision set

/// A normalized set of requested revision numbers
///
/// Either a single revision or an inclusive contiguous range `[start, end]`.
/// Only the bounds are stored; membership is answered arithmetically, so an
/// enormous range costs nothing to construct. Comparisons are numeric; there
/// is no string comparison anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionSet {
    start: u64,
    end: u64,
}

impl RevisionSet {
    /// A set containing one revision
    pub fn single(revision: u64) -> Self {
        Self {
            start: revision,
            end: revision,
        }
    }

    /// The inclusive range `[start, end]`
    ///
    /// An inverted range (`start > end`) is the empty set; the CLI rejects
    /// that case before it gets here.
    pub fn range(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, revision: u64) -> bool {
        revision >= self.start && revision <= self.end
    }

    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for RevisionSet {
    /// Compact rendering for log lines, e.g. `747-750` or `750`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "(none)")
        } else if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
