//! Metadata source configuration with precedence and validation
//!
//! Precedence, lowest first: defaults, the JSON file named by
//! `PHONEMETA_CONFIG`, then the individual `PHONEMETA_*` variables.

use phonemeta_core::{
    Error, Result, DEFAULT_DATA_DIR, DEFAULT_METADATA_FILE_PREFIX, DEFAULT_SINGLE_FILE_NAME,
    PHONEMETA_CONFIG_VAR, PHONEMETA_DATA_DIR_VAR, PHONEMETA_FILE_PREFIX_VAR, PHONEMETA_LAZY_VAR,
    PHONEMETA_SINGLE_FILE_VAR, PHONEMETA_SOURCE_VAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which loading strategy backs the facade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceStrategy {
    /// One blob per key, loaded on first request
    #[default]
    #[serde(alias = "multi")]
    MultiFile,
    /// One blob for every key, loaded up front
    #[serde(alias = "single")]
    SingleFile,
}

impl FromStr for SourceStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "multi" | "multi-file" | "multi_file" => Ok(Self::MultiFile),
            "single" | "single-file" | "single_file" => Ok(Self::SingleFile),
            other => Err(Error::configuration(format!(
                "unknown metadata source strategy '{other}', expected 'multi-file' or 'single-file'"
            ))),
        }
    }
}

impl fmt::Display for SourceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultiFile => write!(f, "multi-file"),
            Self::SingleFile => write!(f, "single-file"),
        }
    }
}

/// Source of configuration for debugging and precedence tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    ConfigFile(PathBuf),
    EnvironmentVariable(String),
    Builder,
}

/// Settings needed to wire a metadata facade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    pub strategy: SourceStrategy,
    /// Directory the file system loader reads blobs from
    pub data_dir: PathBuf,
    /// Prefix of per-key blob names (multi-file)
    pub file_prefix: String,
    /// Name of the bundled blob (single-file)
    pub single_file_name: String,
    /// Defer loading the bundled blob until the first lookup (single-file)
    pub lazy: bool,
    /// Where the last applied layer came from
    pub source: ConfigSource,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            strategy: SourceStrategy::MultiFile,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_prefix: DEFAULT_METADATA_FILE_PREFIX.to_string(),
            single_file_name: DEFAULT_SINGLE_FILE_NAME.to_string(),
            lazy: true,
            source: ConfigSource::Default,
        }
    }
}

impl MetadataConfig {
    pub fn builder() -> MetadataConfigBuilder {
        MetadataConfigBuilder::new()
    }

    /// Reject names no loader could resolve
    pub fn validate(&self) -> Result<()> {
        if self.file_prefix.trim().is_empty() {
            return Err(Error::configuration("metadata file prefix must not be empty"));
        }
        if !crate::loader::is_well_formed_name(&self.file_prefix) {
            return Err(Error::configuration(format!(
                "metadata file prefix '{}' must be a plain file name",
                self.file_prefix
            )));
        }
        if self.single_file_name.trim().is_empty() {
            return Err(Error::configuration(
                "single metadata file name must not be empty",
            ));
        }
        if !crate::loader::is_well_formed_name(&self.single_file_name) {
            return Err(Error::configuration(format!(
                "single metadata file name '{}' must be a plain file name",
                self.single_file_name
            )));
        }
        Ok(())
    }
}

/// Builder for creating metadata configurations
#[derive(Debug, Default)]
pub struct MetadataConfigBuilder {
    config: MetadataConfig,
}

impl MetadataConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MetadataConfig {
                source: ConfigSource::Builder,
                ..MetadataConfig::default()
            },
        }
    }

    pub fn with_strategy(mut self, strategy: SourceStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = data_dir.into();
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.file_prefix = prefix.into();
        self
    }

    pub fn with_single_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.single_file_name = name.into();
        self
    }

    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.config.lazy = lazy;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<MetadataConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// The `metadata` object of a JSON config file; every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    metadata: FileMetadataSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileMetadataSection {
    strategy: Option<SourceStrategy>,
    data_dir: Option<PathBuf>,
    file_prefix: Option<String>,
    single_file_name: Option<String>,
    lazy: Option<bool>,
}

/// Configuration loader that handles precedence
pub struct MetadataConfigLoader;

impl MetadataConfigLoader {
    /// Load configuration with full precedence handling
    pub fn load() -> Result<MetadataConfig> {
        let mut config = MetadataConfig::default();

        if let Ok(path) = std::env::var(PHONEMETA_CONFIG_VAR) {
            config = Self::merge_file(config, Path::new(&path))?;
        }

        config = Self::apply_env(config)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with one JSON config file
    pub fn load_from_file(path: &Path) -> Result<MetadataConfig> {
        let config = Self::merge_file(MetadataConfig::default(), path)?;
        config.validate()?;
        Ok(config)
    }

    fn merge_file(mut config: MetadataConfig, path: &Path) -> Result<MetadataConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read config file", e))?;

        let file_config: FileConfig = serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("invalid metadata config file {}", path.display()), e)
        })?;

        let section = file_config.metadata;
        if let Some(strategy) = section.strategy {
            config.strategy = strategy;
        }
        if let Some(data_dir) = section.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(prefix) = section.file_prefix {
            config.file_prefix = prefix;
        }
        if let Some(name) = section.single_file_name {
            config.single_file_name = name;
        }
        if let Some(lazy) = section.lazy {
            config.lazy = lazy;
        }

        config.source = ConfigSource::ConfigFile(path.to_path_buf());
        Ok(config)
    }

    /// Overlay the `PHONEMETA_*` environment variables
    pub fn apply_env(mut config: MetadataConfig) -> Result<MetadataConfig> {
        let mut applied = false;

        if let Ok(strategy) = std::env::var(PHONEMETA_SOURCE_VAR) {
            config.strategy = strategy.parse()?;
            applied = true;
        }

        if let Ok(data_dir) = std::env::var(PHONEMETA_DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(data_dir);
            applied = true;
        }

        if let Ok(prefix) = std::env::var(PHONEMETA_FILE_PREFIX_VAR) {
            config.file_prefix = prefix;
            applied = true;
        }

        if let Ok(name) = std::env::var(PHONEMETA_SINGLE_FILE_VAR) {
            config.single_file_name = name;
            applied = true;
        }

        if let Ok(lazy) = std::env::var(PHONEMETA_LAZY_VAR) {
            config.lazy = match lazy.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(Error::configuration(format!(
                        "{PHONEMETA_LAZY_VAR} must be true or false, got '{other}'"
                    )))
                }
            };
            applied = true;
        }

        if applied {
            config.source = ConfigSource::EnvironmentVariable("PHONEMETA_*".to_string());
        }
        Ok(config)
    }
}
