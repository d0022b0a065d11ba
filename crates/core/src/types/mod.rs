//! Metadata domain types.
//!
//! - **`record`**: one decoded numbering-plan description for a region or a
//!   non-geographical entity
//! - **`bundle`**: the ordered records produced from a single blob

pub mod bundle;
pub mod record;

pub use bundle::*;
pub use record::*;
