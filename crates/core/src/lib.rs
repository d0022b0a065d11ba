//! Core domain types, errors, and constants for `phonemeta`.
//!
//! This crate holds the pieces every other crate in the workspace agrees on:
//!
//! - **`errors`**: the primary `Error` enum and `Result` alias. Missing, empty
//!   and undecodable metadata are fatal and surface here; "not found" is never
//!   an error and is expressed as `Ok(None)` by the sources.
//! - **`types`**: the decoded `MetadataRecord` and the `MetadataBundle` a
//!   single blob decodes into.
//! - **`constants`**: the non-geographical sentinel, default file names and
//!   environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
