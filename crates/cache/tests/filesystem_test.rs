//! Integration tests reading metadata blobs from disk

mod common;

use common::{blob_name, directory, non_geo, region, single_file_bundle};
use phonemeta_cache::codec::write_bundle_file;
use phonemeta_cache::{
    MetadataConfig, MetadataConfigLoader, MetadataFacadeBuilder, SourceStrategy,
};
use phonemeta_core::{Error, MetadataBundle, DEFAULT_SINGLE_FILE_NAME};
use std::fs;
use tempfile::TempDir;

fn write_multi_file_blobs(dir: &TempDir) {
    for (id, code) in [("US", 1), ("CH", 41), ("GB", 44)] {
        write_bundle_file(
            &dir.path().join(blob_name(id)),
            &MetadataBundle::new(vec![region(id, code)]),
        )
        .unwrap();
    }
    write_bundle_file(
        &dir.path().join(blob_name(800)),
        &MetadataBundle::new(vec![non_geo(800)]),
    )
    .unwrap();
}

#[test]
fn test_multi_file_facade_from_config() {
    let temp_dir = TempDir::new().unwrap();
    write_multi_file_blobs(&temp_dir);

    let config = MetadataConfig::builder()
        .with_data_dir(temp_dir.path())
        .build()
        .unwrap();
    let facade = MetadataFacadeBuilder::from_config(&config)
        .directory(directory())
        .build()
        .unwrap();

    assert_eq!(facade.get_metadata_for_region("CH").unwrap().unwrap().country_code, 41);
    assert!(facade
        .get_metadata_for_non_geographical_region(800)
        .unwrap()
        .is_some());

    // In the directory but without a blob on disk
    let err = facade.get_metadata_for_region("GG").unwrap_err();
    assert!(matches!(err, Error::MissingData { .. }));
}

#[test]
fn test_single_file_facade_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    write_bundle_file(&data_dir.join("bundle.bin"), &single_file_bundle()).unwrap();

    let config_path = temp_dir.path().join("phonemeta.json");
    let config_json = serde_json::json!({
        "metadata": {
            "strategy": "single-file",
            "data_dir": data_dir,
            "single_file_name": "bundle.bin",
            "lazy": false
        }
    });
    fs::write(&config_path, config_json.to_string()).unwrap();

    let config = MetadataConfigLoader::load_from_file(&config_path).unwrap();
    assert_eq!(config.strategy, SourceStrategy::SingleFile);
    assert!(!config.lazy);

    let facade = MetadataFacadeBuilder::from_config(&config)
        .directory(directory())
        .build()
        .unwrap();
    assert_eq!(facade.get_metadata_for_region("GG").unwrap().unwrap().id, "GG");
    assert!(facade
        .get_metadata_for_non_geographical_region(979)
        .unwrap()
        .is_some());
}

#[test]
fn test_eager_single_file_with_missing_blob_fails_to_build() {
    let temp_dir = TempDir::new().unwrap();
    let config = MetadataConfig::builder()
        .with_data_dir(temp_dir.path())
        .with_strategy(SourceStrategy::SingleFile)
        .with_lazy(false)
        .build()
        .unwrap();

    let err = MetadataFacadeBuilder::from_config(&config)
        .directory(directory())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingData { ref name } if name == DEFAULT_SINGLE_FILE_NAME));
}

#[test]
fn test_truncated_blob_on_disk_is_a_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    write_multi_file_blobs(&temp_dir);

    let path = temp_dir.path().join(blob_name("US"));
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let config = MetadataConfig::builder()
        .with_data_dir(temp_dir.path())
        .build()
        .unwrap();
    let facade = MetadataFacadeBuilder::from_config(&config)
        .directory(directory())
        .build()
        .unwrap();

    assert!(matches!(
        facade.get_metadata_for_region("US"),
        Err(Error::Decode { .. })
    ));
    assert!(facade.get_metadata_for_region("GB").unwrap().is_some());
}

#[test]
fn test_malformed_config_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("phonemeta.json");
    fs::write(&config_path, r#"{"metadata": {"strategy": "carrier-pigeon"}}"#).unwrap();

    let err = MetadataConfigLoader::load_from_file(&config_path).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains("phonemeta.json"));
}
