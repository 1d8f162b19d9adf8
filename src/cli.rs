//! Command-line argument definitions

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser as ClapParser;
use color_eyre::eyre::{Result, bail};

use crate::collector::CollectorConfig;
use crate::model::RevisionSet;
use crate::svn::constants::DEFAULT_BRANCH_PREFIX;

/// Collect svn log entries for a revision or revision range across every
/// branch of a repository
#[derive(ClapParser, Debug)]
#[command(name = "svn-revlog", version, about)]
pub struct Cli {
    /// Local working copy used to discover branch names
    pub working_copy: PathBuf,

    /// Repository root URL (the directory containing trunk and branches)
    pub repo_url: String,

    /// Revision to collect, or the start of an inclusive range
    pub start_rev: u64,

    /// End of the inclusive range [START_REV, END_REV]
    pub end_rev: Option<u64>,

    /// Branches directory below the repository root
    #[arg(long, default_value = DEFAULT_BRANCH_PREFIX)]
    pub branch_prefix: String,

    /// Maximum number of branch histories fetched at once
    #[arg(long, short = 'j', default_value_t = 8)]
    pub jobs: usize,

    /// Per-branch fetch timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,
}

impl Cli {
    /// The requested revisions, validated
    pub fn revision_set(&self) -> Result<RevisionSet> {
        match self.end_rev {
            None => Ok(RevisionSet::single(self.start_rev)),
            Some(end) if end < self.start_rev => {
                bail!(
                    "invalid revision range: start {} is greater than end {}",
                    self.start_rev,
                    end
                )
            }
            Some(end) => Ok(RevisionSet::range(self.start_rev, end)),
        }
    }

    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            branch_prefix: self.branch_prefix.clone(),
            max_concurrent: self.jobs.max(1),
            fetch_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
