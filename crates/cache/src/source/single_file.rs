//! Eager source backed by one blob holding every key

use super::MetadataSource;
use crate::codec;
use crate::loader::MetadataLoader;
use crate::monitoring::{MetadataObserver, TracingObserver};
use phonemeta_core::{Error, MetadataBundle, MetadataRecord, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Indexes every record of one blob at construction.
///
/// The blob enumerates the whole key universe, so a key missing from it is
/// `Ok(None)`. Lookups are reads of maps that never change after `new`.
#[derive(Debug, Clone, Default)]
pub struct SingleFileMetadataSource {
    regions: HashMap<String, Arc<MetadataRecord>>,
    non_geographical: HashMap<i32, Arc<MetadataRecord>>,
}

impl SingleFileMetadataSource {
    /// Load and index `file_name`, reporting through `tracing`
    pub fn new(file_name: &str, loader: &dyn MetadataLoader) -> Result<Self> {
        Self::load_with_observer(file_name, loader, &TracingObserver)
    }

    pub fn load_with_observer(
        file_name: &str,
        loader: &dyn MetadataLoader,
        observer: &dyn MetadataObserver,
    ) -> Result<Self> {
        let _span = phonemeta_utils::tracing::load_span(file_name).entered();
        let started = Instant::now();

        let loaded = loader
            .load(file_name)
            .ok_or_else(|| Error::missing_data(file_name))
            .and_then(|stream| {
                codec::decode_from_reader(stream).map_err(|e| e.with_source_name(file_name))
            });
        let bundle = match loaded {
            Ok(bundle) => bundle,
            Err(e) => {
                observer.on_load_failure(file_name, &e);
                return Err(e);
            }
        };

        let source = Self::index(file_name, bundle, observer);
        observer.on_cold_load(file_name, started.elapsed());
        tracing::debug!(
            source = file_name,
            regions = source.region_count(),
            non_geographical = source.non_geographical_count(),
            "indexed single-file metadata"
        );
        Ok(source)
    }

    /// Index records that were already decoded
    pub fn from_bundle(bundle: MetadataBundle) -> Self {
        Self::index("<bundle>", bundle, &TracingObserver)
    }

    fn index(source_name: &str, bundle: MetadataBundle, observer: &dyn MetadataObserver) -> Self {
        let mut regions = HashMap::new();
        let mut non_geographical = HashMap::new();
        let mut duplicates = 0;

        for record in bundle {
            let inserted = if record.is_non_geographical() {
                insert_first(&mut non_geographical, record.country_code, record)
            } else {
                insert_first(&mut regions, record.id.clone(), record)
            };
            if !inserted {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            observer.on_anomaly(source_name, duplicates);
        }

        Self {
            regions,
            non_geographical,
        }
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn non_geographical_count(&self) -> usize {
        self.non_geographical.len()
    }
}

fn insert_first<K: std::hash::Hash + Eq>(
    map: &mut HashMap<K, Arc<MetadataRecord>>,
    key: K,
    record: MetadataRecord,
) -> bool {
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(Arc::new(record));
            true
        }
    }
}

impl MetadataSource for SingleFileMetadataSource {
    fn metadata_for_region(&self, region_code: &str) -> Result<Option<Arc<MetadataRecord>>> {
        Ok(self.regions.get(region_code).cloned())
    }

    fn metadata_for_non_geographical_region(
        &self,
        country_code: i32,
    ) -> Result<Option<Arc<MetadataRecord>>> {
        Ok(self.non_geographical.get(&country_code).cloned())
    }
}
