//! On-demand source backed by one blob per key

use super::MetadataSource;
use crate::classifier::NonGeographicalClassifier;
use crate::codec;
use crate::loader::MetadataLoader;
use crate::monitoring::{MetadataObserver, MetadataStats, StatsSnapshot, TracingObserver};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use phonemeta_core::{Error, MetadataRecord, Result};
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Loads `<prefix>_<key>` the first time a key is requested.
///
/// Racing first requests for one key may each load and decode the blob.
/// Publication is insert-if-absent, so every caller ends up holding the
/// record that was published first and it never changes afterwards.
pub struct MultiFileMetadataSource {
    file_prefix: String,
    loader: Arc<dyn MetadataLoader>,
    classifier: Arc<dyn NonGeographicalClassifier>,
    regions: DashMap<String, Arc<MetadataRecord>>,
    non_geographical: DashMap<i32, Arc<MetadataRecord>>,
    observer: Arc<dyn MetadataObserver>,
    stats: MetadataStats,
}

impl MultiFileMetadataSource {
    pub fn new(
        file_prefix: impl Into<String>,
        loader: Arc<dyn MetadataLoader>,
        classifier: Arc<dyn NonGeographicalClassifier>,
    ) -> Self {
        Self {
            file_prefix: file_prefix.into(),
            loader,
            classifier,
            regions: DashMap::new(),
            non_geographical: DashMap::new(),
            observer: Arc::new(TracingObserver),
            stats: MetadataStats::new(),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn MetadataObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Backing blob name for a region code or calling code
    pub fn file_name_for(&self, key: impl Display) -> String {
        format!("{}_{}", self.file_prefix, key)
    }

    pub fn loaded_regions(&self) -> usize {
        self.regions.len()
    }

    pub fn loaded_calling_codes(&self) -> usize {
        self.non_geographical.len()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn load_and_publish<K>(
        &self,
        published: &DashMap<K, Arc<MetadataRecord>>,
        key: K,
    ) -> Result<Arc<MetadataRecord>>
    where
        K: Eq + Hash + Display,
    {
        let source_name = self.file_name_for(&key);
        let (record, elapsed) = match self.load_record(&source_name) {
            Ok((record, elapsed)) => (Arc::new(record), elapsed),
            Err(e) => {
                self.stats.record_failure();
                self.observer.on_load_failure(&source_name, &e);
                return Err(e);
            }
        };

        // Observer hooks run after the shard guard is released
        match published.entry(key) {
            Entry::Occupied(existing) => {
                let winner = Arc::clone(existing.get());
                drop(existing);
                self.stats.record_redundant_load();
                self.observer.on_redundant_load(&source_name);
                Ok(winner)
            }
            Entry::Vacant(slot) => {
                let winner = Arc::clone(slot.insert(record).value());
                self.stats.record_cold_load();
                self.observer.on_cold_load(&source_name, elapsed);
                Ok(winner)
            }
        }
    }

    /// Load and decode one blob; nothing is published here
    fn load_record(&self, source_name: &str) -> Result<(MetadataRecord, Duration)> {
        let _span = phonemeta_utils::tracing::load_span(source_name).entered();
        let started = Instant::now();

        let stream = self
            .loader
            .load(source_name)
            .ok_or_else(|| Error::missing_data(source_name))?;
        let bundle =
            codec::decode_from_reader(stream).map_err(|e| e.with_source_name(source_name))?;

        let single = bundle.into_single(source_name)?;
        if single.is_anomalous() {
            self.stats.record_anomaly();
            self.observer.on_anomaly(source_name, single.discarded);
        }

        Ok((single.record, started.elapsed()))
    }
}

impl MetadataSource for MultiFileMetadataSource {
    fn metadata_for_region(&self, region_code: &str) -> Result<Option<Arc<MetadataRecord>>> {
        if let Some(record) = self.regions.get(region_code).map(|r| Arc::clone(r.value())) {
            self.stats.record_hit();
            return Ok(Some(record));
        }
        self.load_and_publish(&self.regions, region_code.to_string())
            .map(Some)
    }

    fn metadata_for_non_geographical_region(
        &self,
        country_code: i32,
    ) -> Result<Option<Arc<MetadataRecord>>> {
        if !self.classifier.is_non_geographical(country_code) {
            return Ok(None);
        }
        if let Some(record) = self
            .non_geographical
            .get(&country_code)
            .map(|r| Arc::clone(r.value()))
        {
            self.stats.record_hit();
            return Ok(Some(record));
        }
        self.load_and_publish(&self.non_geographical, country_code)
            .map(Some)
    }
}

impl std::fmt::Debug for MultiFileMetadataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiFileMetadataSource")
            .field("file_prefix", &self.file_prefix)
            .field("loaded_regions", &self.regions.len())
            .field("loaded_calling_codes", &self.non_geographical.len())
            .finish()
    }
}
