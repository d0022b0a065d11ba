//! Source built on first use

use super::MetadataSource;
use once_cell::sync::OnceCell;
use phonemeta_core::{MetadataRecord, Result};
use std::sync::Arc;

type SourceFactory = Box<dyn Fn() -> Result<Arc<dyn MetadataSource>> + Send + Sync>;

/// Builds its inner source on the first lookup and publishes it only once it
/// is complete.
///
/// Concurrent first lookups wait for the one running initialisation. A failed
/// initialisation publishes nothing; the error goes to the caller that
/// triggered it and the next lookup starts over.
pub struct DeferredMetadataSource {
    cell: OnceCell<Arc<dyn MetadataSource>>,
    factory: SourceFactory,
}

impl DeferredMetadataSource {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn MetadataSource>> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    fn source(&self) -> Result<&Arc<dyn MetadataSource>> {
        self.cell.get_or_try_init(|| {
            tracing::debug!("initializing deferred metadata source");
            (self.factory)()
        })
    }
}

impl MetadataSource for DeferredMetadataSource {
    fn metadata_for_region(&self, region_code: &str) -> Result<Option<Arc<MetadataRecord>>> {
        self.source()?.metadata_for_region(region_code)
    }

    fn metadata_for_non_geographical_region(
        &self,
        country_code: i32,
    ) -> Result<Option<Arc<MetadataRecord>>> {
        self.source()?
            .metadata_for_non_geographical_region(country_code)
    }
}

impl std::fmt::Debug for DeferredMetadataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredMetadataSource")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SingleFileMetadataSource;
    use phonemeta_core::{Error, MetadataBundle};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn france_source() -> Arc<dyn MetadataSource> {
        Arc::new(SingleFileMetadataSource::from_bundle(MetadataBundle::new(vec![
            MetadataRecord::new("FR", 33),
        ])))
    }

    #[test]
    fn test_factory_runs_on_first_lookup_only() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = DeferredMetadataSource::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(france_source())
        });

        assert!(!source.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(source.metadata_for_region("FR").unwrap().is_some());
        assert!(source.metadata_for_region("DE").unwrap().is_none());
        assert!(source.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_initialisation_publishes_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = DeferredMetadataSource::new(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Error::missing_data("SingleFilePhoneMetadataProto"))
            } else {
                Ok(france_source())
            }
        });

        let err = source.metadata_for_region("FR").unwrap_err();
        assert!(matches!(err, Error::MissingData { .. }));
        assert!(!source.is_initialized());

        assert!(source.metadata_for_region("FR").unwrap().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_lookups_initialise_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = Arc::new(DeferredMetadataSource::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(france_source())
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || source.metadata_for_region("FR").unwrap().unwrap())
            })
            .collect();
        let records: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(records.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
