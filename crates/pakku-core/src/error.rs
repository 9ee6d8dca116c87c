use thiserror::Error;

/// Errors that can occur during pakku core operations.
///
/// Finding no matches is deliberately *not* an error: the matcher returns
/// an empty sequence and the caller reports a count of zero.
#[derive(Debug, Error)]
pub enum PakkuError {
    /// The title fragment is empty or contains only whitespace.
    #[error("title fragment is empty or whitespace-only")]
    EmptyFragment,

    /// The resolution tag is not of the form `<digits>p` (e.g. `1080p`).
    #[error("{value:?} is not a valid resolution tag")]
    InvalidResolution {
        /// The rejected resolution tag.
        value: String,
    },

    /// A pack identifier handed to the range compressor has a non-numeric
    /// suffix. Caller error, failed fast rather than silently skipped.
    #[error("malformed pack number: {value:?}")]
    MalformedPackNumber {
        /// The rejected identifier.
        value: String,
    },

    /// A layout pattern failed to compile. Reachable only through a
    /// title fragment that was not escaped for literal matching.
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for pakku core operations.
pub type Result<T> = std::result::Result<T, PakkuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = PakkuError::EmptyFragment;
        assert_eq!(err.to_string(), "title fragment is empty or whitespace-only");

        let err = PakkuError::InvalidResolution {
            value: "ultra".into(),
        };
        assert!(err.to_string().contains("ultra"));

        let err = PakkuError::MalformedPackNumber {
            value: "#12a".into(),
        };
        assert!(err.to_string().contains("#12a"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PakkuError>();
    }
}
