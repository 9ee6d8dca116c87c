//! pakku — search XDCC packlists for anime episodes.
//!
//! Fetches the plaintext packlist of a chosen bot, matches announcement
//! lines against a title fragment and resolution, and prints ready-to-use
//! `xdcc send` / `xdcc batch` commands.

mod bots;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use tracing::info;

use pakku_core::is_resolution_tag;

use crate::bots::{BOTS, Bot};
use crate::session::{Session, prompt};

/// CLI arguments
#[derive(Parser)]
#[command(name = "pakku")]
#[command(about = "Search XDCC packlists and build download commands")]
#[command(version)]
struct Cli {
    /// Anime title to search for (prompted when omitted)
    #[arg(short, long)]
    query: Option<String>,

    /// Video resolution, e.g. 480p/720p/1080p (prompted when omitted)
    #[arg(short, long)]
    resolution: Option<String>,

    /// Bot name (case-sensitive) or its 1-based menu number
    #[arg(short, long)]
    bot: Option<String>,

    /// Read the packlist from a local file instead of fetching
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print every matched pack entry
    #[arg(long)]
    each: bool,

    /// Print a machine-readable summary and exit (requires --query)
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if cli.json && cli.query.is_none() {
        bail!("--json requires --query");
    }

    let query = match cli.query {
        Some(query) => query,
        None => prompt("Enter the name of the anime: ")?,
    };
    if query.trim().is_empty() {
        println!("{}", style("Are you practising air-typing?").cyan());
        println!("{}", style("Type an anime name.").red().bold());
        return Ok(ExitCode::FAILURE);
    }

    let resolution = match cli.resolution {
        Some(resolution) => resolution,
        None => prompt("Enter the resolution for download (480p/720p/1080p): ")?,
    }
    .to_lowercase();
    if !is_resolution_tag(&resolution) {
        println!(
            "{}",
            style(format!("{resolution} is not a valid resolution.")).red().bold()
        );
        return Ok(ExitCode::FAILURE);
    }

    let choice = match cli.bot {
        Some(choice) => choice,
        None => {
            println!("List of bots available:");
            for (i, bot) in BOTS.iter().enumerate() {
                println!(
                    "    {} {}",
                    style(format!("{}.", i + 1)).bold(),
                    style(bot.name).cyan(),
                );
            }
            prompt("Enter the number or the name of bot (case-sensitive): ")?
        }
    };
    let Some(bot) = bots::resolve(&choice) else {
        println!("{}", style("There is no such bot.").red().bold());
        return Ok(ExitCode::FAILURE);
    };

    let text = match cli.file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read packlist from {}", path.display()))?,
        None => fetch_packlist(bot).await?,
    };

    let session = Session::new(bot, resolution, text, cli.each);
    if cli.json {
        let summary = session.summary(&regex::escape(query.trim()))?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        session.run(&query)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// One blocking fetch of the bot's full packlist text.
async fn fetch_packlist(bot: &Bot) -> Result<String> {
    println!("{}", style("Fetching data from the bot…").cyan());
    info!(bot = bot.name, url = bot.url, "fetching packlist");

    let response = reqwest::get(bot.url)
        .await
        .context("the required data cannot be fetched")?;
    let status = response.status();
    if !status.is_success() {
        bail!(
            "the required data cannot be fetched: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status"),
        );
    }
    response
        .text()
        .await
        .context("failed to read the packlist body")
}
