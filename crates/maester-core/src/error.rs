//! Error types for the maester workspace.

/// Errors that can occur while fetching or presenting directory data.
///
/// All failures are surfaced verbatim to the user; there is no retry
/// policy and no recovery path beyond re-running the command. The enum
/// is `#[non_exhaustive]` to allow adding variants without breaking
/// changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The API answered with a non-success status code.
    #[error("API returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder when it could not be read
        message: String,
    },

    /// The request never produced a response (connection refused,
    /// timeout, DNS failure).
    #[error("request failed: {message}")]
    Transport {
        /// Transport-level error description
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The requested entity does not exist (HTTP 404).
    ///
    /// Rendered as a distinct "not found" message, not as an error.
    #[error("{what} not found")]
    NotFound {
        /// What was looked up (e.g., "character 583")
        what: String,
    },

    /// A member reference URL did not carry a character id.
    #[error("invalid character reference: {url}")]
    InvalidReference {
        /// The offending URL
        url: String,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (config file reads, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type alias for maester operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a transport error from any displayable source.
    pub fn transport<S: ToString>(source: S) -> Self {
        Error::Transport {
            message: source.to_string(),
        }
    }

    /// Creates a not-found error for the given entity description.
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Error::NotFound { what: what.into() }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error means the entity simply does not
    /// exist, as opposed to the request failing.
    ///
    /// The view layer uses this to pick the "not found" branch over the
    /// "something went wrong" branch.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = Error::Http {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "API returned HTTP 500: internal error");
    }

    #[test]
    fn test_transport_error_display() {
        let err = Error::transport("connection refused");
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("character 583");
        assert_eq!(err.to_string(), "character 583 not found");
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(Error::not_found("house").is_not_found());
        assert!(!Error::transport("timeout").is_not_found());
        assert!(!Error::config("bad key").is_not_found());
        assert!(!Error::Http {
            status: 503,
            message: "unavailable".into()
        }
        .is_not_found());
    }

    #[test]
    fn test_invalid_reference_display() {
        let err = Error::InvalidReference {
            url: "https://example.com/api/houses/17".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid character reference: https://example.com/api/houses/17"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("unknown key 'api.pagesize'");
        assert_eq!(
            err.to_string(),
            "configuration error: unknown key 'api.pagesize'"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{nope}").unwrap_err();
        let err: Error = serde_err.into();
        assert!(err.to_string().starts_with("failed to decode response"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
