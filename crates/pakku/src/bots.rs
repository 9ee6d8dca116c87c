//! The known packlist-publishing bots.

/// An XDCC bot and the URL of its plaintext packlist feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bot {
    /// IRC nick of the bot, addressed in `/msg` commands.
    pub name: &'static str,
    /// Where the bot publishes its packlist.
    pub url: &'static str,
}

/// Known bots in menu order. Read-only process-wide configuration.
pub const BOTS: &[Bot] = &[
    Bot {
        name: "CR-HOLLAND|NEW",
        url: "https://arutha.info/xdcc/CR-NL.NEW.xdcc.txt",
    },
    Bot {
        name: "CR-ARUTHA|NEW",
        url: "https://arutha.info/xdcc/CR-ARUTHA.NEW.xdcc.txt",
    },
    Bot {
        name: "ARUTHA-BATCH|720p",
        url: "https://arutha.info/xdcc/ARUTHA-BATCH.720p.xdcc.txt",
    },
    Bot {
        name: "ARUTHA-BATCH|1080p",
        url: "https://arutha.info/xdcc/ARUTHA-BATCH.1080p.xdcc.txt",
    },
];

/// Resolves user input as a 1-based menu number or an exact
/// (case-sensitive) bot name.
pub fn resolve(input: &str) -> Option<&'static Bot> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return number.checked_sub(1).and_then(|i| BOTS.get(i));
    }
    BOTS.iter().find(|bot| bot.name == input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_by_menu_number() {
        assert_eq!(resolve("1").unwrap().name, "CR-HOLLAND|NEW");
        assert_eq!(resolve("4").unwrap().name, "ARUTHA-BATCH|1080p");
    }

    #[test]
    fn out_of_range_numbers_resolve_to_none() {
        assert!(resolve("0").is_none());
        assert!(resolve("5").is_none());
    }

    #[test]
    fn resolve_by_name_is_case_sensitive() {
        assert!(resolve("CR-ARUTHA|NEW").is_some());
        assert!(resolve("cr-arutha|new").is_none());
        assert!(resolve("NO-SUCH-BOT").is_none());
    }

    #[test]
    fn feed_urls_are_https() {
        for bot in BOTS {
            assert!(bot.url.starts_with("https://"), "{}", bot.name);
        }
    }
}
