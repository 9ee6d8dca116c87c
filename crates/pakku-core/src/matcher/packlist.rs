use regex::Regex;
use tracing::debug;

use crate::error::{PakkuError, Result};
use crate::matcher::layout::Layout;
use crate::types::EpisodeRecord;

/// Two-stage packlist matcher with pre-compiled layout patterns.
///
/// One matcher is built per query (title fragment + resolution tag) and
/// holds no state between scans; each scan reads its caller-supplied text
/// and produces fresh records.
pub struct PacklistMatcher {
    paren: Regex,
    bracket: Regex,
}

impl PacklistMatcher {
    /// Compiles both layout patterns for the given query.
    ///
    /// The title fragment must already be escaped for literal matching
    /// (`regex::escape`); the resolution tag must be of the form
    /// `<digits>p`, e.g. `1080p`.
    ///
    /// # Errors
    ///
    /// Returns `PakkuError::EmptyFragment` for an empty or whitespace-only
    /// fragment, `PakkuError::InvalidResolution` for a malformed resolution
    /// tag, and `PakkuError::RegexError` if the fragment was not escaped
    /// and breaks the pattern.
    pub fn new(fragment: &str, resolution: &str) -> Result<Self> {
        if fragment.trim().is_empty() {
            return Err(PakkuError::EmptyFragment);
        }
        if !is_resolution_tag(resolution) {
            return Err(PakkuError::InvalidResolution {
                value: resolution.to_string(),
            });
        }
        Ok(Self {
            paren: Regex::new(&Layout::ParenResolution.pattern(fragment, resolution))?,
            bracket: Regex::new(&Layout::BracketResolution.pattern(fragment, resolution))?,
        })
    }

    /// Scans the source text and returns records in order of appearance.
    ///
    /// The parenthesized-resolution layout is attempted first; only when
    /// it yields zero records is the bracketed-resolution layout attempted,
    /// exactly once, against the same text. Results from the two layouts
    /// are never merged. An empty result is a normal outcome, not an error.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<EpisodeRecord> {
        for layout in Layout::ALL {
            let records = self.scan_layout(layout, text);
            if !records.is_empty() {
                return records;
            }
            debug!(%layout, "layout yielded no records");
        }
        Vec::new()
    }

    /// Runs a single matching pass with one layout.
    #[must_use]
    pub fn scan_layout(&self, layout: Layout, text: &str) -> Vec<EpisodeRecord> {
        let pattern = match layout {
            Layout::ParenResolution => &self.paren,
            Layout::BracketResolution => &self.bracket,
        };
        pattern
            .captures_iter(text)
            .map(|caps| EpisodeRecord {
                pack_number: caps["pack"].to_string(),
                file_size: caps["size"].to_string(),
                uploader: caps["uploader"].to_string(),
                anime_name: caps["title"].to_string(),
                episode_number: caps["episode"].to_string(),
            })
            .collect()
    }
}

/// Accepts exactly `<digits>p`, case-insensitive on the unit.
#[must_use]
pub fn is_resolution_tag(resolution: &str) -> bool {
    resolution
        .strip_suffix(['p', 'P'])
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
