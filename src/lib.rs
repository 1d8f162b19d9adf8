//! svn-revlog - cross-branch svn log collection
//!
//! Fetches the log entries for a set of revision numbers across every branch
//! of a Subversion repository (trunk plus everything under the branches
//! directory) and merges them into one report.
//!
//! This library provides:
//! - [`cli`]: Command-line argument definitions
//! - [`collector`]: Concurrent per-branch log collection
//! - [`model`]: Domain models (log entries, collections, revision sets)
//! - [`report`]: Plain-text report rendering
//! - [`svn`]: svn client execution and output parsing

pub mod cli;
pub mod collector;
pub mod model;
pub mod report;
pub mod svn;
