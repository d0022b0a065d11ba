//! Metadata sources
//!
//! A [`MetadataSource`] resolves a record for a region code or for a
//! non-geographical calling code. Two strategies implement it:
//!
//! - [`MultiFileMetadataSource`] loads one blob per key the first time that
//!   key is requested
//! - [`SingleFileMetadataSource`] loads one blob holding every key and
//!   indexes it before construction returns
//!
//! [`DeferredMetadataSource`] postpones building any source until its first
//! lookup.

mod deferred;
mod multi_file;
mod single_file;

pub use deferred::DeferredMetadataSource;
pub use multi_file::MultiFileMetadataSource;
pub use single_file::SingleFileMetadataSource;

use phonemeta_core::{MetadataRecord, Result};
use std::sync::Arc;

/// Uniform lookup surface over the loading strategies.
///
/// `Ok(None)` means the key is not known to the source. Errors are reserved
/// for data that should exist and cannot be produced.
pub trait MetadataSource: Send + Sync {
    fn metadata_for_region(&self, region_code: &str) -> Result<Option<Arc<MetadataRecord>>>;

    fn metadata_for_non_geographical_region(
        &self,
        country_code: i32,
    ) -> Result<Option<Arc<MetadataRecord>>>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for Arc<T> {
    fn metadata_for_region(&self, region_code: &str) -> Result<Option<Arc<MetadataRecord>>> {
        (**self).metadata_for_region(region_code)
    }

    fn metadata_for_non_geographical_region(
        &self,
        country_code: i32,
    ) -> Result<Option<Arc<MetadataRecord>>> {
        (**self).metadata_for_non_geographical_region(country_code)
    }
}
