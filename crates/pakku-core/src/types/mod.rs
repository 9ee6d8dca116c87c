pub mod record;

pub use record::EpisodeRecord;
