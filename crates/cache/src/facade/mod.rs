//! Metadata facade consumed by the phone-number engine
//!
//! Hides which loading strategy is active and answers "no" for keys outside
//! the calling-code directory before any source is consulted.

mod builder;

pub use builder::MetadataFacadeBuilder;

use crate::classifier::{CountryCodeDirectory, NonGeographicalClassifier};
use crate::source::MetadataSource;
use phonemeta_core::{MetadataRecord, Result, REGION_CODE_FOR_NON_GEO_ENTITY};
use std::sync::Arc;

/// Region and calling-code lookups over a configured [`MetadataSource`].
///
/// Cloning is cheap and clones share the same underlying cache.
#[derive(Clone)]
pub struct MetadataFacade {
    source: Arc<dyn MetadataSource>,
    directory: Arc<CountryCodeDirectory>,
}

impl MetadataFacade {
    pub fn new(source: Arc<dyn MetadataSource>, directory: Arc<CountryCodeDirectory>) -> Self {
        Self { source, directory }
    }

    pub fn builder() -> MetadataFacadeBuilder {
        MetadataFacadeBuilder::new()
    }

    /// Record for a geographic region; `Ok(None)` for regions the directory
    /// does not list, including the non-geographical sentinel
    pub fn get_metadata_for_region(
        &self,
        region_code: &str,
    ) -> Result<Option<Arc<MetadataRecord>>> {
        if !self.directory.is_supported_region(region_code) {
            tracing::trace!(region_code, "region not in directory");
            return Ok(None);
        }
        self.source.metadata_for_region(region_code)
    }

    /// Record for a non-geographical calling code; `Ok(None)` without any
    /// load for codes that belong to geographic regions
    pub fn get_metadata_for_non_geographical_region(
        &self,
        country_code: i32,
    ) -> Result<Option<Arc<MetadataRecord>>> {
        if !self.directory.is_non_geographical(country_code) {
            tracing::trace!(country_code, "calling code is not non-geographical");
            return Ok(None);
        }
        self.source.metadata_for_non_geographical_region(country_code)
    }

    /// Dispatch on the region code: the sentinel selects the calling-code lookup
    pub fn get_metadata_for_region_or_calling_code(
        &self,
        country_code: i32,
        region_code: &str,
    ) -> Result<Option<Arc<MetadataRecord>>> {
        if region_code == REGION_CODE_FOR_NON_GEO_ENTITY {
            self.get_metadata_for_non_geographical_region(country_code)
        } else {
            self.get_metadata_for_region(region_code)
        }
    }

    pub fn supported_regions(&self) -> Vec<&str> {
        self.directory.supported_regions()
    }

    pub fn supported_global_network_calling_codes(&self) -> Vec<i32> {
        self.directory.non_geographical_codes()
    }

    pub fn directory(&self) -> &CountryCodeDirectory {
        &self.directory
    }
}

impl std::fmt::Debug for MetadataFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataFacade")
            .field("calling_codes", &self.directory.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SingleFileMetadataSource;
    use phonemeta_core::MetadataBundle;

    fn facade() -> MetadataFacade {
        let directory = CountryCodeDirectory::from_entries([
            (33, vec!["FR"]),
            (49, vec!["DE"]),
            (800, vec!["001"]),
        ])
        .unwrap();
        let source = SingleFileMetadataSource::from_bundle(MetadataBundle::new(vec![
            MetadataRecord::non_geographical(800),
            MetadataRecord::new("FR", 33),
        ]));
        MetadataFacade::new(Arc::new(source), Arc::new(directory))
    }

    #[test]
    fn test_region_lookups() {
        let facade = facade();
        assert_eq!(facade.get_metadata_for_region("FR").unwrap().unwrap().id, "FR");
        // Listed in the directory but absent from the data
        assert!(facade.get_metadata_for_region("DE").unwrap().is_none());
        assert!(facade.get_metadata_for_region("ZZ").unwrap().is_none());
        assert!(facade.get_metadata_for_region("001").unwrap().is_none());
    }

    #[test]
    fn test_region_or_calling_code_dispatch() {
        let facade = facade();
        let non_geo = facade
            .get_metadata_for_region_or_calling_code(800, "001")
            .unwrap()
            .unwrap();
        assert_eq!(non_geo.country_code, 800);

        let france = facade
            .get_metadata_for_region_or_calling_code(33, "FR")
            .unwrap()
            .unwrap();
        assert_eq!(france.id, "FR");
    }

    #[test]
    fn test_supported_sets() {
        let facade = facade();
        assert_eq!(facade.supported_regions(), vec!["DE", "FR"]);
        assert_eq!(facade.supported_global_network_calling_codes(), vec![800]);
    }

    #[test]
    fn test_clones_share_records() {
        let facade = facade();
        let clone = facade.clone();
        let a = facade.get_metadata_for_region("FR").unwrap().unwrap();
        let b = clone.get_metadata_for_region("FR").unwrap().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
