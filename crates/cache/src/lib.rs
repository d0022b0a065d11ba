//! Phone-number metadata sources for phonemeta
//!
//! This crate turns serialized metadata blobs into shared, immutable
//! records and serves them to the parsing engine:
//! - A binary codec for metadata blobs
//! - Loader and classifier ports supplied by the host
//! - An on-demand multi-file source and an eager single-file source
//! - A facade hiding which source is active
//! - Configuration with file and environment precedence
//! - Load observers and statistics

pub mod classifier;
pub mod codec;
pub mod config;
pub mod facade;
pub mod loader;
pub mod monitoring;
pub mod source;

pub use classifier::{CountryCodeDirectory, NonGeographicalClassifier};
pub use config::{MetadataConfig, MetadataConfigBuilder, MetadataConfigLoader, SourceStrategy};
pub use facade::{MetadataFacade, MetadataFacadeBuilder};
pub use loader::{FileSystemLoader, InMemoryLoader, MetadataLoader, MetadataStream};
pub use monitoring::{MetadataObserver, MetadataStats, RecordingObserver, TracingObserver};
pub use phonemeta_core::{Error, MetadataBundle, MetadataRecord, Result};
pub use source::{
    DeferredMetadataSource, MetadataSource, MultiFileMetadataSource, SingleFileMetadataSource,
};
