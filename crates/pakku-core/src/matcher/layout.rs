use std::fmt;

use serde::{Deserialize, Serialize};

/// The two recognized textual arrangements of an announcement line,
/// distinguished by how the resolution tag is wrapped:
///
/// ```text
/// #9999  312x [1.2G] [SubsPlease] Tokyo Revengers - 01v2 (1080p) [F00D1E55].mkv
/// #9999  312x [1.2G] [HorribleSubs] Tokyo Revengers - 01v2 [1080p].mkv
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Resolution wrapped in parentheses: `(1080p)`.
    ParenResolution,
    /// Resolution wrapped in square brackets: `[1080p]`.
    BracketResolution,
}

impl Layout {
    /// All layouts, in the order the matcher attempts them.
    pub const ALL: [Layout; 2] = [Self::ParenResolution, Self::BracketResolution];

    /// Builds the full line-matching expression for this layout.
    ///
    /// The title fragment must already be escaped for literal matching; it
    /// anchors the *start* of the title field and everything up to the
    /// ` - ` episode separator is swallowed into the title, so a short
    /// fragment like `tok` matches any title beginning with those
    /// characters. The whole pattern is case-insensitive.
    ///
    /// The resolution closer is intentionally not required: the pattern
    /// ends right after the opening delimiter and the tag itself.
    #[must_use]
    pub fn pattern(self, fragment: &str, resolution: &str) -> String {
        let open = match self {
            Self::ParenResolution => r"\(",
            Self::BracketResolution => r"\[",
        };
        format!(
            r"(?i)(?P<pack>#\d+)\s*[\dx]+[\s\[]+(?P<size>[\d.BKMGT]+)[\]\s\[]+(?P<uploader>.+)\]\s*(?P<title>{fragment}.*)\s-\s(?P<episode>[v\d]+)\s*{open}{resolution}"
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParenResolution => write!(f, "parenthesized"),
            Self::BracketResolution => write!(f, "bracketed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_order_is_paren_first() {
        assert_eq!(
            Layout::ALL,
            [Layout::ParenResolution, Layout::BracketResolution]
        );
    }

    #[test]
    fn pattern_embeds_fragment_and_resolution() {
        let pattern = Layout::ParenResolution.pattern("tokyo", "1080p");
        assert!(pattern.starts_with("(?i)"));
        assert!(pattern.contains("tokyo"));
        assert!(pattern.ends_with(r"\(1080p"));

        let pattern = Layout::BracketResolution.pattern("tokyo", "1080p");
        assert!(pattern.ends_with(r"\[1080p"));
    }

    #[test]
    fn layout_display() {
        assert_eq!(Layout::ParenResolution.to_string(), "parenthesized");
        assert_eq!(Layout::BracketResolution.to_string(), "bracketed");
    }
}
