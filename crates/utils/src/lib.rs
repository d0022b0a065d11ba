//! Shared utilities for phonemeta
//!
//! Logging setup and the atomic file writes used when metadata blobs are
//! produced on disk.

pub mod atomic_file;
pub mod tracing;

pub use atomic_file::*;
