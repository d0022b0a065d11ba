//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create a missing data error for a backing file name
    #[must_use]
    pub fn missing_data(name: impl Into<String>) -> Self {
        Error::MissingData { name: name.into() }
    }

    /// Create an empty data error for a backing file name
    #[must_use]
    pub fn empty_data(name: impl Into<String>) -> Self {
        Error::EmptyData { name: name.into() }
    }

    /// Create a decode error without an underlying source
    #[must_use]
    pub fn decode(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Decode {
            name: name.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a decode error wrapping the codec failure
    #[must_use]
    pub fn decode_with_source(
        name: impl Into<String>,
        reason: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Decode {
            name: name.into(),
            reason: reason.into(),
            source: Some(source.into()),
        }
    }

    /// Create an encode error wrapping the serializer failure
    #[must_use]
    pub fn encode(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Encode {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a JSON error for a document that failed to parse
    #[must_use]
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            message: format!("{}: {}", message.into(), source),
            source,
        }
    }

    /// Attach the backing file name to a decode error produced by the codec
    #[must_use]
    pub fn with_source_name(self, name: impl Into<String>) -> Self {
        match self {
            Error::Decode {
                name: current,
                reason,
                source,
            } if current.is_empty() => Error::Decode {
                name: name.into(),
                reason,
                source,
            },
            other => other,
        }
    }

    /// Whether the error means the requested data cannot be produced at all.
    ///
    /// Undecodable data is treated the same as absent data.
    #[must_use]
    pub const fn is_fatal_missing(&self) -> bool {
        matches!(self, Error::MissingData { .. } | Error::Decode { .. })
    }
}
