//! Interactive query session over an already-fetched packlist.

use std::io::{self, Write};

use anyhow::Result;
use console::style;
use serde::Serialize;

use pakku_core::{EpisodeRecord, PacklistMatcher, batch_list, compress, unique_titles};

use crate::bots::Bot;

/// One fetched packlist plus the query context needed to search it.
///
/// The text is fetched once; refining the search term loops over the same
/// text instead of re-fetching.
pub struct Session {
    bot: &'static Bot,
    resolution: String,
    text: String,
    each: bool,
}

/// Machine-readable result of a single matching pass (`--json`).
#[derive(Debug, Serialize)]
pub struct Summary {
    pub bot: String,
    pub resolution: String,
    pub records: Vec<EpisodeRecord>,
    pub titles: Vec<String>,
    pub latest_pack: Option<String>,
    pub batch: Option<String>,
}

impl Session {
    pub fn new(bot: &'static Bot, resolution: String, text: String, each: bool) -> Self {
        Self {
            bot,
            resolution,
            text,
            each,
        }
    }

    /// Runs the interactive loop: match, report, offer to refine, and on
    /// the final pass print the two download commands.
    pub fn run(&self, query: &str) -> Result<()> {
        let mut fragment = regex::escape(query.trim());
        loop {
            let matcher = PacklistMatcher::new(&fragment, &self.resolution)?;
            let records = matcher.scan(&self.text);
            let titles = unique_titles(&records);

            if self.each {
                for record in &records {
                    print_record(record);
                }
            }
            println!(
                "\n{} entries matched and {} unique titles found.",
                style(records.len()).yellow().bold(),
                style(titles.len()).yellow().bold(),
            );
            if !titles.is_empty() {
                println!("{}", style("Unique titles found:").bold());
                for (i, title) in titles.iter().enumerate() {
                    println!(
                        "    {} {}",
                        style(format!("{}.", i + 1)).bold(),
                        style(title).cyan(),
                    );
                }
            }

            let refined = prompt(
                "Do you want to change the search term? \
                 If yes, enter the new search term: ",
            )?;
            if !refined.is_empty() {
                fragment = regex::escape(&refined);
                println!();
                continue;
            }

            if let Some(latest) = records.last() {
                println!(
                    "\n{}{}",
                    style("To download the latest episode, use ").bold(),
                    style(send_command(self.bot.name, &latest.pack_number)).yellow(),
                );
                let packs: Vec<&str> = records.iter().map(|r| r.pack_number.as_str()).collect();
                let ranges = compress(&packs)?;
                println!(
                    "\n{}{}",
                    style("To download in batch, use ").bold(),
                    style(batch_command(self.bot.name, &batch_list(&ranges))).yellow(),
                );
            } else {
                println!(
                    "{}",
                    style("No matches were found. Check the spelling, bot and resolution chosen.")
                        .red()
                        .bold(),
                );
            }
            return Ok(());
        }
    }

    /// Performs a single matching pass and packages everything the caller
    /// needs, without prompting.
    pub fn summary(&self, fragment: &str) -> Result<Summary> {
        let matcher = PacklistMatcher::new(fragment, &self.resolution)?;
        let records = matcher.scan(&self.text);
        let titles = unique_titles(&records);
        let packs: Vec<&str> = records.iter().map(|r| r.pack_number.as_str()).collect();
        let batch = if packs.is_empty() {
            None
        } else {
            Some(batch_list(&compress(&packs)?))
        };
        Ok(Summary {
            bot: self.bot.name.to_string(),
            resolution: self.resolution.clone(),
            latest_pack: records.last().map(|r| r.pack_number.clone()),
            titles,
            records,
            batch,
        })
    }
}

/// The single-episode download command addressed to the originating bot.
pub fn send_command(bot: &str, pack_number: &str) -> String {
    format!("/msg {bot} xdcc send {pack_number}")
}

/// The batch download command over a compressed, comma-joined pack list.
pub fn batch_command(bot: &str, batch: &str) -> String {
    format!("/msg {bot} xdcc batch {batch}")
}

/// Prints one matched record in packlist format, filtered and colorized.
fn print_record(record: &EpisodeRecord) {
    println!(
        "{} {} - {} ({}) by {}",
        style(&record.pack_number).green(),
        style(&record.anime_name).magenta(),
        style(&record.episode_number).cyan(),
        style(&record.file_size).bold(),
        record.uploader,
    );
}

/// Writes the label and reads one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::BOTS;

    #[test]
    fn command_strings_use_the_literal_formats() {
        assert_eq!(
            send_command("CR-HOLLAND|NEW", "#1502"),
            "/msg CR-HOLLAND|NEW xdcc send #1502"
        );
        assert_eq!(
            batch_command("ARUTHA-BATCH|1080p", "1-2,4-6"),
            "/msg ARUTHA-BATCH|1080p xdcc batch 1-2,4-6"
        );
    }

    #[test]
    fn summary_of_matching_text() {
        let text = "\
#1501   97x [1.2G] [SubsPlease] Tokyo Revengers - 01v2 (1080p) [F00D1E55].mkv
#1502   88x [1.2G] [SubsPlease] Tokyo Revengers - 02 (1080p) [0DDBA115].mkv
#1504   70x [1.2G] [SubsPlease] Tokyo Revengers - 03 (1080p) [CAB00D1E].mkv
"
        .to_string();
        let session = Session::new(&BOTS[3], "1080p".into(), text, false);
        let summary = session.summary("tokyo revengers").unwrap();

        assert_eq!(summary.records.len(), 3);
        assert_eq!(summary.titles, ["Tokyo Revengers"]);
        assert_eq!(summary.latest_pack.as_deref(), Some("#1504"));
        assert_eq!(summary.batch.as_deref(), Some("1501-1502,1504"));

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"latest_pack\":\"#1504\""));
    }

    #[test]
    fn summary_of_no_matches_is_empty_not_error() {
        let session = Session::new(&BOTS[0], "1080p".into(), String::new(), false);
        let summary = session.summary("vinland saga").unwrap();
        assert!(summary.records.is_empty());
        assert!(summary.titles.is_empty());
        assert_eq!(summary.latest_pack, None);
        assert_eq!(summary.batch, None);
    }
}
