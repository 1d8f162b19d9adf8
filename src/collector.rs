//! Fan-out log collection
//!
//! Fetches the commit history of trunk and every branch concurrently,
//! filters each to the requested revisions, and merges the matches into one
//! descending-sorted collection. Per-source failures are isolated: one
//! unreachable branch never discards the results of the others.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::model::{LogCollection, LogEntry, RevisionSet};
use crate::svn::SvnError;
use crate::svn::constants::{DEFAULT_BRANCH_PREFIX, TRUNK_PATH};
use crate::svn::parser::Parser;

/// Read access to a repository's branch list and per-branch histories
///
/// Implemented by [`SvnExecutor`](crate::svn::SvnExecutor); tests substitute
/// an in-memory source.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Bare branch names under the repository-relative `prefix`
    async fn branch_names(&self, prefix: &str) -> Result<Vec<String>, SvnError>;

    /// Full commit-history document for a branch or trunk URL
    async fn history(&self, url: &str) -> Result<String, SvnError>;
}

/// Tuning knobs for the collection fan-out
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Repository-relative branches directory, with surrounding slashes
    pub branch_prefix: String,

    /// Maximum number of history fetches in flight at once
    pub max_concurrent: usize,

    /// Per-fetch deadline; an overrun fails that source only
    pub fetch_timeout: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            branch_prefix: DEFAULT_BRANCH_PREFIX.to_string(),
            max_concurrent: 8,
            fetch_timeout: Duration::from_secs(120),
        }
    }
}

/// One history source that could not be read
#[derive(Debug)]
pub struct SourceFailure {
    /// URL of the branch or trunk that failed
    pub source: String,
    pub error: SvnError,
}

/// Result of a collection run: the merged entries plus any sources that
/// could not be read
#[derive(Debug, Default)]
pub struct CollectOutcome {
    pub logs: LogCollection,
    pub failures: Vec<SourceFailure>,
}

/// Collect log entries for `revisions` across trunk and every branch
///
/// Branch enumeration failure is fatal; nothing has been fetched at that
/// point. After enumeration, one task per source runs under a semaphore
/// bound, and every task is joined regardless of the others' outcomes. The
/// returned collection is sorted by revision, descending.
///
/// A revision that exists on no branch simply contributes no entries; that
/// is not an error.
pub async fn collect<S>(
    source: Arc<S>,
    revisions: &RevisionSet,
    repo_root: &str,
    config: &CollectorConfig,
) -> Result<CollectOutcome, SvnError>
where
    S: HistorySource + 'static,
{
    let branches = source.branch_names(&config.branch_prefix).await?;
    info!(%revisions, branch_count = branches.len(), "collecting logs");

    let root = repo_root.trim_end_matches('/');
    let mut sources: Vec<String> = branches
        .iter()
        .map(|name| format!("{root}{}{name}", config.branch_prefix))
        .collect();
    sources.push(format!("{root}{TRUNK_PATH}"));

    let semaphore = Arc::new(Semaphore::new(config.max_concurrent));
    let mut tasks = Vec::with_capacity(sources.len());

    for url in sources {
        let source = Arc::clone(&source);
        let semaphore = Arc::clone(&semaphore);
        let revisions = revisions.clone();
        let fetch_timeout = config.fetch_timeout;

        tasks.push(tokio::spawn(async move {
            // Bounds the number of svn processes in flight at once.
            // The semaphore lives for the whole collection, so acquisition
            // cannot observe a closed semaphore.
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("collection semaphore closed");
            let result = fetch_one(source.as_ref(), &url, &revisions, fetch_timeout).await;
            (url, result)
        }));
    }

    let mut outcome = CollectOutcome::default();
    for joined in join_all(tasks).await {
        match joined {
            Ok((url, Ok(entries))) => {
                debug!(source = %url, matches = entries.len(), "source done");
                outcome.logs.extend(entries);
            }
            Ok((url, Err(error))) => {
                outcome.failures.push(SourceFailure { source: url, error });
            }
            // A panicked task; nothing source-specific left to salvage.
            Err(join_error) => return Err(SvnError::IoError(io::Error::other(join_error))),
        }
    }

    outcome.logs.sort_descending();
    Ok(outcome)
}

/// Fetch one source's history and keep the entries matching `revisions`
async fn fetch_one<S>(
    source: &S,
    url: &str,
    revisions: &RevisionSet,
    fetch_timeout: Duration,
) -> Result<Vec<LogEntry>, SvnError>
where
    S: HistorySource + ?Sized,
{
    let document = timeout(fetch_timeout, source.history(url))
        .await
        .map_err(|_| SvnError::Timeout {
            seconds: fetch_timeout.as_secs(),
        })??;

    Ok(Parser::parse_log(&document, url)
        .into_iter()
        .filter(|entry| revisions.contains(entry.revision))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory history source keyed by full source URL
    struct MockSource {
        branches: Vec<String>,
        histories: HashMap<String, String>,
        /// URLs whose history fetch fails
        broken: Vec<String>,
        /// URLs whose history fetch never completes
        hanging: Vec<String>,
    }

    impl MockSource {
        fn new(branches: &[&str]) -> Self {
            Self {
                branches: branches.iter().map(|s| s.to_string()).collect(),
                histories: HashMap::new(),
                broken: Vec::new(),
                hanging: Vec::new(),
            }
        }

        fn with_history(mut self, url: &str, revisions: &[u64]) -> Self {
            self.histories.insert(url.to_string(), log_document(revisions));
            self
        }

        fn with_broken(mut self, url: &str) -> Self {
            self.broken.push(url.to_string());
            self
        }

        fn with_hanging(mut self, url: &str) -> Self {
            self.hanging.push(url.to_string());
            self
        }
    }

    #[async_trait]
    impl HistorySource for MockSource {
        async fn branch_names(&self, _prefix: &str) -> Result<Vec<String>, SvnError> {
            Ok(self.branches.clone())
        }

        async fn history(&self, url: &str) -> Result<String, SvnError> {
            if self.hanging.iter().any(|u| u == url) {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            if self.broken.iter().any(|u| u == url) {
                return Err(SvnError::CommandFailed {
                    stderr: "svn: E170013: Unable to connect".to_string(),
                    exit_code: 1,
                });
            }
            Ok(self.histories.get(url).cloned().unwrap_or_default())
        }
    }

    /// Build a plain `svn log` document containing the given revisions
    fn log_document(revisions: &[u64]) -> String {
        let sep = crate::svn::constants::LOG_SEPARATOR;
        let mut doc = format!("{sep}\n");
        for rev in revisions {
            doc.push_str(&format!(
                "r{rev} | alice | 2024-01-29 15:30:12 +0900 (Mon, 29 Jan 2024) | 1 line\n\
                 \n\
                 change {rev}\n\
                 {sep}\n"
            ));
        }
        doc
    }

    const ROOT: &str = "https://svn.example.com/repo";

    fn quick_config() -> CollectorConfig {
        CollectorConfig {
            fetch_timeout: Duration::from_millis(100),
            ..CollectorConfig::default()
        }
    }

    #[tokio::test]
    async fn merges_across_branches_sorted_descending() {
        let source = MockSource::new(&["feature-x", "release-1"])
            .with_history(&format!("{ROOT}/trunk"), &[748, 750])
            .with_history(&format!("{ROOT}/branches/feature-x"), &[749])
            .with_history(&format!("{ROOT}/branches/release-1"), &[200]);

        let revisions = RevisionSet::range(747, 750);
        let outcome = collect(Arc::new(source), &revisions, ROOT, &quick_config())
            .await
            .unwrap();

        assert!(outcome.failures.is_empty());
        let revs: Vec<u64> = outcome.logs.iter().map(|e| e.revision).collect();
        assert_eq!(revs, vec![750, 749, 748]);
        assert!(outcome.logs.iter().all(|e| revisions.contains(e.revision)));
    }

    #[tokio::test]
    async fn merged_revision_appears_once_per_branch() {
        let source = MockSource::new(&["feature-x"])
            .with_history(&format!("{ROOT}/trunk"), &[750])
            .with_history(&format!("{ROOT}/branches/feature-x"), &[750]);

        let outcome = collect(
            Arc::new(source),
            &RevisionSet::single(750),
            ROOT,
            &quick_config(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.logs.len(), 2);
        let paths: Vec<&str> = outcome.logs.iter().map(|e| e.branch_path.as_str()).collect();
        assert!(paths.contains(&"https://svn.example.com/repo/trunk"));
        assert!(paths.contains(&"https://svn.example.com/repo/branches/feature-x"));
    }

    #[tokio::test]
    async fn trunk_only_revision_yields_one_trunk_entry() {
        let source = MockSource::new(&["feature-x"])
            .with_history(&format!("{ROOT}/trunk"), &[750])
            .with_history(&format!("{ROOT}/branches/feature-x"), &[300]);

        let outcome = collect(
            Arc::new(source),
            &RevisionSet::single(750),
            ROOT,
            &quick_config(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.logs.len(), 1);
        let entry = outcome.logs.iter().next().unwrap();
        assert!(entry.is_trunk());
    }

    #[tokio::test]
    async fn sparse_range_yields_only_existing_revisions() {
        let source =
            MockSource::new(&[]).with_history(&format!("{ROOT}/trunk"), &[748, 750]);

        let outcome = collect(
            Arc::new(source),
            &RevisionSet::range(747, 750),
            ROOT,
            &quick_config(),
        )
        .await
        .unwrap();

        let revs: Vec<u64> = outcome.logs.iter().map(|e| e.revision).collect();
        assert_eq!(revs, vec![750, 748]);
    }

    #[tokio::test]
    async fn unknown_revision_is_empty_not_error() {
        let source = MockSource::new(&["feature-x"])
            .with_history(&format!("{ROOT}/trunk"), &[1, 2])
            .with_history(&format!("{ROOT}/branches/feature-x"), &[3]);

        let outcome = collect(
            Arc::new(source),
            &RevisionSet::single(9999),
            ROOT,
            &quick_config(),
        )
        .await
        .unwrap();

        assert!(outcome.logs.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn broken_branch_does_not_discard_other_results() {
        let source = MockSource::new(&["feature-x", "dead-branch"])
            .with_history(&format!("{ROOT}/trunk"), &[750])
            .with_history(&format!("{ROOT}/branches/feature-x"), &[749])
            .with_broken(&format!("{ROOT}/branches/dead-branch"));

        let outcome = collect(
            Arc::new(source),
            &RevisionSet::range(749, 750),
            ROOT,
            &quick_config(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.logs.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(
            outcome.failures[0].source,
            "https://svn.example.com/repo/branches/dead-branch"
        );
        assert!(matches!(
            outcome.failures[0].error,
            SvnError::CommandFailed { .. }
        ));
    }

    #[tokio::test]
    async fn hung_fetch_times_out_as_source_failure() {
        let source = MockSource::new(&["slow-branch"])
            .with_history(&format!("{ROOT}/trunk"), &[750])
            .with_hanging(&format!("{ROOT}/branches/slow-branch"));

        let outcome = collect(
            Arc::new(source),
            &RevisionSet::single(750),
            ROOT,
            &quick_config(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.logs.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.failures[0].error,
            SvnError::Timeout { seconds: _ }
        ));
    }

    #[tokio::test]
    async fn enumeration_failure_is_fatal() {
        struct NoBranches;

        #[async_trait]
        impl HistorySource for NoBranches {
            async fn branch_names(&self, _prefix: &str) -> Result<Vec<String>, SvnError> {
                Err(SvnError::NotAWorkingCopy {
                    path: "/tmp/not-a-wc".to_string(),
                })
            }

            async fn history(&self, _url: &str) -> Result<String, SvnError> {
                unreachable!("no fetch may be attempted after enumeration fails");
            }
        }

        let result = collect(
            Arc::new(NoBranches),
            &RevisionSet::single(1),
            ROOT,
            &quick_config(),
        )
        .await;

        assert!(matches!(result, Err(SvnError::NotAWorkingCopy { .. })));
    }
}
