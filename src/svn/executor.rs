//! svn command executor
//!
//! Handles running svn commands and capturing their output.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::SvnError;
use super::constants::{self, commands, errors, flags};
use super::parser::Parser;
use crate::collector::HistorySource;

/// Executor for svn commands
///
/// Holds the working-copy path used to resolve repository-relative (`^/`)
/// URLs. Repository reads themselves go through explicit URLs and do not
/// touch the working copy.
#[derive(Debug, Clone)]
pub struct SvnExecutor {
    /// Path to the local working copy
    working_copy: PathBuf,

    /// Client binary to invoke
    command: PathBuf,
}

impl SvnExecutor {
    /// Create a new executor for the given working copy
    pub fn new(working_copy: PathBuf) -> Self {
        Self {
            working_copy,
            command: PathBuf::from(constants::SVN_COMMAND),
        }
    }

    /// Substitute the client binary (tests use a stand-in script)
    #[cfg(test)]
    fn with_command(mut self, command: &std::path::Path) -> Self {
        self.command = command.to_path_buf();
        self
    }

    /// Run an svn command with the given arguments
    ///
    /// Runs inside the working copy and always adds `--non-interactive` so a
    /// credential prompt can never hang an unattended invocation.
    pub async fn run(&self, args: &[&str]) -> Result<String, SvnError> {
        let mut cmd = Command::new(&self.command);
        cmd.current_dir(&self.working_copy);
        cmd.arg(flags::NON_INTERACTIVE);
        cmd.args(args);
        // A fetch dropped at its timeout must not leave the client running;
        // the in-flight process bound depends on this.
        cmd.kill_on_drop(true);

        debug!(?args, "running svn");

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SvnError::SvnNotFound
            } else {
                SvnError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_WORKING_COPY) {
                return Err(SvnError::NotAWorkingCopy {
                    path: self.working_copy.display().to_string(),
                });
            }

            Err(SvnError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `svn ls` against the branches directory of the repository the
    /// working copy belongs to
    ///
    /// `prefix` is the repository-relative branches path (e.g. `/branches/`);
    /// the caret URL form resolves it against the repository root.
    pub async fn list_raw(&self, prefix: &str) -> Result<String, SvnError> {
        let url = format!("^{prefix}");
        self.run(&[commands::LIST, &url]).await
    }

    /// Run `svn log` for a branch or trunk URL and return the raw document
    pub async fn log_raw(&self, url: &str) -> Result<String, SvnError> {
        self.run(&[commands::LOG, url]).await
    }
}

#[async_trait]
impl HistorySource for SvnExecutor {
    async fn branch_names(&self, prefix: &str) -> Result<Vec<String>, SvnError> {
        let output = self.list_raw(prefix).await?;
        Ok(Parser::parse_branch_list(&output))
    }

    async fn history(&self, url: &str) -> Result<String, SvnError> {
        self.log_raw(url).await
    }
}
