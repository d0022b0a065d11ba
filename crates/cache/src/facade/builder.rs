//! Facade builder and strategy wiring

use super::MetadataFacade;
use crate::classifier::{CountryCodeDirectory, NonGeographicalClassifier};
use crate::config::{MetadataConfig, SourceStrategy};
use crate::loader::{is_well_formed_name, FileSystemLoader, MetadataLoader};
use crate::monitoring::{MetadataObserver, TracingObserver};
use crate::source::{
    DeferredMetadataSource, MetadataSource, MultiFileMetadataSource, SingleFileMetadataSource,
};
use phonemeta_core::{Error, Result, DEFAULT_METADATA_FILE_PREFIX, DEFAULT_SINGLE_FILE_NAME};
use std::sync::Arc;

/// Builder wiring a loader, a directory and a strategy into a [`MetadataFacade`]
pub struct MetadataFacadeBuilder {
    directory: Option<Arc<CountryCodeDirectory>>,
    loader: Option<Arc<dyn MetadataLoader>>,
    observer: Option<Arc<dyn MetadataObserver>>,
    strategy: SourceStrategy,
    file_prefix: String,
    single_file_name: String,
    lazy: bool,
}

impl Default for MetadataFacadeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataFacadeBuilder {
    pub fn new() -> Self {
        Self {
            directory: None,
            loader: None,
            observer: None,
            strategy: SourceStrategy::MultiFile,
            file_prefix: DEFAULT_METADATA_FILE_PREFIX.to_string(),
            single_file_name: DEFAULT_SINGLE_FILE_NAME.to_string(),
            lazy: true,
        }
    }

    /// Take strategy, names and laziness from `config` and read blobs from
    /// its data directory
    pub fn from_config(config: &MetadataConfig) -> Self {
        Self::new()
            .strategy(config.strategy)
            .file_prefix(config.file_prefix.clone())
            .single_file_name(config.single_file_name.clone())
            .lazy_single_file(config.lazy)
            .loader(Arc::new(FileSystemLoader::new(config.data_dir.clone())))
    }

    pub fn directory(mut self, directory: Arc<CountryCodeDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn loader(mut self, loader: Arc<dyn MetadataLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn MetadataObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn strategy(mut self, strategy: SourceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn single_file_name(mut self, name: impl Into<String>) -> Self {
        self.single_file_name = name.into();
        self
    }

    /// Defer loading the bundled blob to the first lookup
    pub fn lazy_single_file(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// Build the facade.
    ///
    /// An eager single-file facade loads and indexes its blob here and fails
    /// when the blob is missing or undecodable.
    pub fn build(self) -> Result<MetadataFacade> {
        let directory = self
            .directory
            .ok_or_else(|| Error::configuration("metadata facade needs a calling-code directory"))?;
        let loader = self
            .loader
            .ok_or_else(|| Error::configuration("metadata facade needs a loader"))?;
        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(TracingObserver) as Arc<dyn MetadataObserver>);

        tracing::debug!(strategy = %self.strategy, lazy = self.lazy, "building metadata facade");

        let source: Arc<dyn MetadataSource> = match self.strategy {
            SourceStrategy::MultiFile => {
                if !is_well_formed_name(&self.file_prefix) {
                    return Err(Error::configuration(format!(
                        "metadata file prefix '{}' must be a plain file name",
                        self.file_prefix
                    )));
                }
                let classifier: Arc<dyn NonGeographicalClassifier> = directory.clone();
                Arc::new(
                    MultiFileMetadataSource::new(self.file_prefix, loader, classifier)
                        .with_observer(observer),
                )
            }
            SourceStrategy::SingleFile if self.lazy => {
                let file_name = self.single_file_name;
                Arc::new(DeferredMetadataSource::new(move || {
                    let source = SingleFileMetadataSource::load_with_observer(
                        &file_name,
                        loader.as_ref(),
                        observer.as_ref(),
                    )?;
                    Ok(Arc::new(source) as Arc<dyn MetadataSource>)
                }))
            }
            SourceStrategy::SingleFile => Arc::new(SingleFileMetadataSource::load_with_observer(
                &self.single_file_name,
                loader.as_ref(),
                observer.as_ref(),
            )?),
        };

        Ok(MetadataFacade::new(source, directory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::InMemoryLoader;
    use phonemeta_core::{MetadataBundle, MetadataRecord};

    fn directory() -> Arc<CountryCodeDirectory> {
        Arc::new(CountryCodeDirectory::from_entries([(33, vec!["FR"]), (800, vec!["001"])]).unwrap())
    }

    #[test]
    fn test_directory_and_loader_are_required() {
        let missing_directory = MetadataFacadeBuilder::new()
            .loader(Arc::new(InMemoryLoader::new()))
            .build();
        assert!(matches!(missing_directory, Err(Error::Configuration { .. })));

        let missing_loader = MetadataFacadeBuilder::new().directory(directory()).build();
        assert!(matches!(missing_loader, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_eager_single_file_fails_at_build() {
        let result = MetadataFacadeBuilder::new()
            .directory(directory())
            .loader(Arc::new(InMemoryLoader::new()))
            .strategy(SourceStrategy::SingleFile)
            .lazy_single_file(false)
            .build();
        assert!(matches!(result, Err(Error::MissingData { .. })));
    }

    #[test]
    fn test_lazy_single_file_fails_at_first_lookup() {
        let facade = MetadataFacadeBuilder::new()
            .directory(directory())
            .loader(Arc::new(InMemoryLoader::new()))
            .strategy(SourceStrategy::SingleFile)
            .build()
            .unwrap();
        assert!(matches!(
            facade.get_metadata_for_region("FR"),
            Err(Error::MissingData { .. })
        ));
    }

    #[test]
    fn test_multi_file_prefix_must_be_a_plain_name() {
        let loader = Arc::new(InMemoryLoader::new());
        let result = MetadataFacadeBuilder::new()
            .directory(directory())
            .loader(loader.clone())
            .file_prefix("../PhoneNumberMetadataProto")
            .build();

        assert!(matches!(result, Err(Error::Configuration { .. })));
        assert_eq!(loader.total_loads(), 0);
    }

    #[test]
    fn test_custom_names_are_used() {
        let loader = Arc::new(
            InMemoryLoader::new()
                .with_bundle("Custom_FR", &MetadataBundle::new(vec![MetadataRecord::new("FR", 33)]))
                .unwrap(),
        );
        let facade = MetadataFacadeBuilder::new()
            .directory(directory())
            .loader(loader.clone())
            .file_prefix("Custom")
            .build()
            .unwrap();

        assert!(facade.get_metadata_for_region("FR").unwrap().is_some());
        assert_eq!(loader.load_count("Custom_FR"), 1);
    }
}
