//! svn-specific constants
//!
//! Centralized definitions for svn command names, flags, and output markers.

/// svn client binary name
pub const SVN_COMMAND: &str = "svn";

/// Conventional branches directory, relative to the repository root
pub const DEFAULT_BRANCH_PREFIX: &str = "/branches/";

/// Trunk path, relative to the repository root
pub const TRUNK_PATH: &str = "/trunk";

/// Separator line between entries in plain `svn log` output (72 dashes)
pub const LOG_SEPARATOR: &str =
    "------------------------------------------------------------------------";

/// svn subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const LIST: &str = "ls";
}

/// svn command flags
pub mod flags {
    /// Never prompt for credentials; fail instead
    pub const NON_INTERACTIVE: &str = "--non-interactive";
}

/// Error detection patterns in svn output
pub mod errors {
    /// Pattern indicating the given path is not a working copy (E155007)
    pub const NOT_A_WORKING_COPY: &str = "is not a working copy";
}
