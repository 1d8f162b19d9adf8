//! svn-revlog - cross-branch svn log collection
//!
//! Binary entry point: parse arguments, run the collector, print the report.

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use svn_revlog::cli::Cli;
use svn_revlog::collector;
use svn_revlog::report;
use svn_revlog::svn::SvnExecutor;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = Cli::parse();
    let revisions = args.revision_set()?;
    let config = args.collector_config();

    info!(repo = %args.repo_url, %revisions, "getting logs");

    let executor = Arc::new(SvnExecutor::new(args.working_copy.clone()));
    let outcome = collector::collect(executor, &revisions, &args.repo_url, &config).await?;

    for failure in &outcome.failures {
        warn!(source = %failure.source, error = %failure.error, "source unreachable");
    }

    // stdout carries only the report, so redirecting it stays clean.
    io::stdout().write_all(report::render(&outcome.logs).as_bytes())?;

    Ok(())
}

/// Diagnostics go to stderr; level via RUST_LOG, default info
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
}
