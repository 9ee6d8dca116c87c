use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PakkuError, Result};

/// A maximal run of consecutive pack numbers, rendered as `"N"` or `"N-M"`.
///
/// Entries partition the compressed identifier sequence in original order;
/// no identifier is reordered or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeEntry {
    /// A lone pack number.
    Single(u64),
    /// A run of consecutive pack numbers, inclusive on both ends.
    Span {
        /// First pack number of the run.
        first: u64,
        /// Last pack number of the run.
        last: u64,
    },
}

impl RangeEntry {
    /// The numeric value a following identifier is compared against.
    #[must_use]
    pub fn last(self) -> u64 {
        match self {
            Self::Single(n) => n,
            Self::Span { last, .. } => last,
        }
    }

    /// Extends the run to end at `n`, converting a lone number into a span.
    #[must_use]
    fn extended_to(self, n: u64) -> Self {
        match self {
            Self::Single(first) => Self::Span { first, last: n },
            Self::Span { first, .. } => Self::Span { first, last: n },
        }
    }

    /// Every pack number covered by this entry, in order.
    #[must_use]
    pub fn expand(self) -> Vec<u64> {
        match self {
            Self::Single(n) => vec![n],
            Self::Span { first, last } => (first..=last).collect(),
        }
    }
}

impl fmt::Display for RangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Span { first, last } => write!(f, "{first}-{last}"),
        }
    }
}

/// Groups an ordered sequence of `#N` identifiers into contiguous runs.
///
/// A single open run is maintained: each identifier whose numeric value is
/// exactly one above the run's last value extends it; anything else (a gap,
/// an equal value, or a decrease) closes the run and opens a new one. One
/// pass, no backtracking.
///
/// # Errors
///
/// Returns `PakkuError::MalformedPackNumber` if any identifier has a
/// non-numeric suffix. Identifier order is never treated as an error.
pub fn compress<S: AsRef<str>>(pack_numbers: &[S]) -> Result<Vec<RangeEntry>> {
    let mut entries = Vec::new();
    let mut open: Option<RangeEntry> = None;
    for pack in pack_numbers {
        let n = pack_value(pack.as_ref())?;
        open = Some(match open {
            None => RangeEntry::Single(n),
            Some(run) if n.checked_sub(run.last()) == Some(1) => run.extended_to(n),
            Some(run) => {
                entries.push(run);
                RangeEntry::Single(n)
            }
        });
    }
    entries.extend(open);
    Ok(entries)
}

/// Renders compressed entries as the comma-joined batch list.
#[must_use]
pub fn batch_list(entries: &[RangeEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Numeric value of a pack identifier, ignoring the leading `#`.
fn pack_value(pack: &str) -> Result<u64> {
    let digits = pack.strip_prefix('#').unwrap_or(pack);
    digits
        .parse()
        .map_err(|_| PakkuError::MalformedPackNumber {
            value: pack.to_string(),
        })
}
