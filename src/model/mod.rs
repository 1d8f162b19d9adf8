//! Data models for svn-revlog
//!
//! UI-independent data structures representing log entries, merged log
//! collections, and requested revision sets.

mod collection;
mod log_entry;
mod revision;

pub use collection::LogCollection;
pub use log_entry::LogEntry;
pub use revision::RevisionSet;
