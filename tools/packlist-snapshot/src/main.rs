//! Packlist Snapshot Tool
//!
//! Downloads live packlist feeds into local files so that matching can be
//! exercised offline against real announcement text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

/// Feeds snapshotted when no URLs are given.
const DEFAULT_FEEDS: &[&str] = &[
    "https://arutha.info/xdcc/CR-NL.NEW.xdcc.txt",
    "https://arutha.info/xdcc/CR-ARUTHA.NEW.xdcc.txt",
    "https://arutha.info/xdcc/ARUTHA-BATCH.720p.xdcc.txt",
    "https://arutha.info/xdcc/ARUTHA-BATCH.1080p.xdcc.txt",
];

/// CLI arguments
#[derive(Parser)]
#[command(name = "packlist-snapshot")]
#[command(about = "Download packlist feeds to local files for offline testing")]
#[command(version)]
struct Cli {
    /// Directory the snapshots are written to
    #[arg(short, long, default_value = "packlists")]
    out_dir: PathBuf,

    /// Re-download even if a snapshot already exists
    #[arg(short, long)]
    force: bool,

    /// Feed URLs to snapshot (defaults to every known bot feed)
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;

    let urls: Vec<String> = if cli.urls.is_empty() {
        DEFAULT_FEEDS.iter().map(ToString::to_string).collect()
    } else {
        cli.urls
    };

    for url in &urls {
        let path = cli.out_dir.join(snapshot_name(url));
        if path.exists() && !cli.force {
            info!(path = %path.display(), "snapshot exists, skipping (use --force to refresh)");
            continue;
        }
        match snapshot(url).await {
            Ok(text) => {
                std::fs::write(&path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(url = %url, path = %path.display(), "snapshot written");
            }
            Err(err) => warn!(url = %url, "snapshot failed: {err:#}"),
        }
    }
    Ok(())
}

/// Fetches one feed, failing on a non-success status.
async fn snapshot(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .context("the required data cannot be fetched")?
        .error_for_status()
        .context("feed returned a non-success status")?;
    response.text().await.context("failed to read feed body")
}

/// File name for a feed, taken from the last path segment of its URL.
fn snapshot_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
