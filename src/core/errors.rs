//! Shared error types for the interpretation engine

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for symbolmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input or configuration (missing counters, bad thresholds)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input that could not be decoded at all
    #[error("Parse error in {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: BoxedSource,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn parse(
        what: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse {
            what: what.into(),
            source: Box::new(source),
        }
    }

    /// Whether the user can fix this by correcting their input or config.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::configuration("missing field `function_count`");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing field `function_count`"
        );
        assert!(err.is_user_fixable());
    }

    #[test]
    fn test_io_error_not_user_fixable() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(!err.is_user_fixable());
    }
}
