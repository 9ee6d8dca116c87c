use std::fmt;

use serde::{Deserialize, Serialize};

/// One structured match extracted from a packlist announcement.
///
/// Records are immutable once produced and ordered by position of
/// occurrence in the source text. All fields are kept as they appear in
/// the announcement line — in particular `anime_name` preserves the
/// as-authored case and `episode_number` may carry a version suffix
/// such as `01v2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Bot-assigned pack identifier, e.g. `#1234`.
    pub pack_number: String,

    /// Free-form size annotation, e.g. `1.2G`.
    pub file_size: String,

    /// Release group / uploader tag, e.g. `SubsPlease`.
    pub uploader: String,

    /// The matched title substring, case as-authored.
    pub anime_name: String,

    /// Episode number string, e.g. `01` or `01v2`.
    pub episode_number: String,
}

impl fmt::Display for EpisodeRecord {
    /// Renders the record in packlist format, filtered and easy to digest.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} ({}) by {}",
            self.pack_number, self.anime_name, self.episode_number, self.file_size, self.uploader
        )
    }
}
