//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for phonemeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for phonemeta operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key advertised as available has no backing data
    MissingData { name: String },

    /// Backing data decoded to zero records
    EmptyData { name: String },

    /// Backing data is malformed or truncated
    Decode {
        name: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Records could not be serialized
    Encode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
