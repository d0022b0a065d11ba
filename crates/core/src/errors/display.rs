//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingData { name } => {
                write!(f, "missing metadata: no data available for '{name}'")
            }
            Error::EmptyData { name } => {
                write!(f, "empty metadata: '{name}' decoded to zero records")
            }
            Error::Decode { name, reason, .. } => {
                if name.is_empty() {
                    write!(f, "failed to decode metadata: {reason}")
                } else {
                    write!(f, "failed to decode metadata '{name}': {reason}")
                }
            }
            Error::Encode { message, .. } => {
                write!(f, "failed to encode metadata: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
