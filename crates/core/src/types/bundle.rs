//! Ordered collections of records decoded from one blob

use super::record::MetadataRecord;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ordered sequence of records produced from one decoded blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataBundle {
    records: Vec<MetadataRecord>,
}

/// The record kept from a bundle expected to hold exactly one
#[derive(Debug, Clone)]
pub struct SingleRecord {
    pub record: MetadataRecord,
    /// Number of extra records that were dropped
    pub discarded: usize,
}

impl SingleRecord {
    /// True when the bundle held more than one record
    pub fn is_anomalous(&self) -> bool {
        self.discarded > 0
    }
}

impl MetadataBundle {
    pub fn new(records: Vec<MetadataRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<MetadataRecord> {
        self.records
    }

    /// Reduce a bundle for a singly-keyed file to its one record.
    ///
    /// An empty bundle is an error. Extra records are counted and dropped,
    /// the first record wins.
    pub fn into_single(self, source_name: &str) -> Result<SingleRecord> {
        let discarded = self.records.len().saturating_sub(1);
        let record = self
            .records
            .into_iter()
            .next()
            .ok_or_else(|| Error::empty_data(source_name))?;
        Ok(SingleRecord { record, discarded })
    }
}

impl From<Vec<MetadataRecord>> for MetadataBundle {
    fn from(records: Vec<MetadataRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<MetadataRecord> for MetadataBundle {
    fn from_iter<I: IntoIterator<Item = MetadataRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for MetadataBundle {
    type Item = MetadataRecord;
    type IntoIter = std::vec::IntoIter<MetadataRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetadataBundle {
    type Item = &'a MetadataRecord;
    type IntoIter = std::slice::Iter<'a, MetadataRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
