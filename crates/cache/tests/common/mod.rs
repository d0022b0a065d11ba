#![allow(dead_code)]
//! Shared fixtures for the metadata source integration tests

use phonemeta_cache::{CountryCodeDirectory, InMemoryLoader};
use phonemeta_core::{MetadataBundle, MetadataRecord, PhoneNumberDesc, DEFAULT_METADATA_FILE_PREFIX};
use std::sync::Arc;

/// Calling codes 1 (US, CA), 41 (CH), 44 (GB, GG), 800 and 979 (non-geographical)
pub fn directory() -> Arc<CountryCodeDirectory> {
    Arc::new(
        CountryCodeDirectory::from_entries([
            (1, vec!["US", "CA"]),
            (41, vec!["CH"]),
            (44, vec!["GB", "GG"]),
            (800, vec!["001"]),
            (979, vec!["001"]),
        ])
        .unwrap(),
    )
}

pub fn region(id: &str, country_code: i32) -> MetadataRecord {
    MetadataRecord::new(id, country_code)
        .with_international_prefix("00")
        .with_general_desc(PhoneNumberDesc::new("\\d{6,10}"))
}

pub fn non_geo(country_code: i32) -> MetadataRecord {
    MetadataRecord::non_geographical(country_code)
        .with_general_desc(PhoneNumberDesc::new("\\d{8}").with_possible_lengths(vec![8]))
}

pub fn blob_name(key: impl std::fmt::Display) -> String {
    format!("{DEFAULT_METADATA_FILE_PREFIX}_{key}")
}

/// One blob per region and per non-geographical code of [`directory`]
pub fn multi_file_loader() -> InMemoryLoader {
    let mut loader = InMemoryLoader::new();
    for (id, code) in [("US", 1), ("CA", 1), ("CH", 41), ("GB", 44), ("GG", 44)] {
        loader = loader
            .with_bundle(blob_name(id), &MetadataBundle::new(vec![region(id, code)]))
            .unwrap();
    }
    for code in [800, 979] {
        loader = loader
            .with_bundle(blob_name(code), &MetadataBundle::new(vec![non_geo(code)]))
            .unwrap();
    }
    loader
}

/// Every record of [`directory`] in one bundle
pub fn single_file_bundle() -> MetadataBundle {
    MetadataBundle::new(vec![
        region("US", 1),
        region("CA", 1),
        region("CH", 41),
        region("GB", 44),
        region("GG", 44),
        non_geo(800),
        non_geo(979),
    ])
}
