//! # Pakku Core
//!
//! The matching and compression engine behind the pakku XDCC packlist
//! search tool. Turns unstructured bot announcement text into structured
//! episode records and compresses consecutive pack numbers into the
//! compact list used by `xdcc batch` commands.
//!
//! The core is pure and synchronous: it performs no I/O, holds no state
//! between queries, and treats "found nothing" as a normal empty result.
//!
//! ## Quick Start
//!
//! ```rust
//! use pakku_core::{PacklistMatcher, compress, unique_titles};
//!
//! let text = concat!(
//!     "#1501   97x [1.2G] [SubsPlease] Tokyo Revengers - 01v2 (1080p) [F00D1E55].mkv\n",
//!     "#1502   88x [1.2G] [SubsPlease] Tokyo Revengers - 02 (1080p) [0DDBA115].mkv\n",
//! );
//!
//! let matcher = PacklistMatcher::new("tokyo revengers", "1080p").unwrap();
//! let records = matcher.scan(text);
//!
//! assert_eq!(records[0].pack_number, "#1501");
//! assert_eq!(records[0].episode_number, "01v2");
//! assert_eq!(unique_titles(&records), ["Tokyo Revengers"]);
//!
//! let packs: Vec<&str> = records.iter().map(|r| r.pack_number.as_str()).collect();
//! let ranges = compress(&packs).unwrap();
//! assert_eq!(ranges[0].to_string(), "1501-1502");
//! ```
pub mod error;
pub mod matcher;
pub mod ranges;
pub mod titles;
pub mod types;

// Re-export primary API
pub use error::{PakkuError, Result};
pub use matcher::{Layout, PacklistMatcher, is_resolution_tag};
pub use ranges::{RangeEntry, batch_list, compress};
pub use titles::unique_titles;
pub use types::EpisodeRecord;
