//! Constants used throughout the phonemeta codebase

// Region code used by records describing non-geographical entities
pub const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";

// Region code returned when a number cannot be attributed to any region
pub const UNKNOWN_REGION: &str = "ZZ";

// Backing file names
pub const DEFAULT_METADATA_FILE_PREFIX: &str = "PhoneNumberMetadataProto";
pub const DEFAULT_SINGLE_FILE_NAME: &str = "SingleFilePhoneMetadataProto";
pub const SHORT_NUMBER_METADATA_FILE_PREFIX: &str = "ShortNumberMetadataProto";
pub const ALTERNATE_FORMATS_FILE_PREFIX: &str = "PhoneNumberAlternateFormatsProto";

// Environment variable names
pub const PHONEMETA_LOG_VAR: &str = "PHONEMETA_LOG";
pub const PHONEMETA_DATA_DIR_VAR: &str = "PHONEMETA_DATA_DIR";
pub const PHONEMETA_SOURCE_VAR: &str = "PHONEMETA_SOURCE";
pub const PHONEMETA_FILE_PREFIX_VAR: &str = "PHONEMETA_FILE_PREFIX";
pub const PHONEMETA_SINGLE_FILE_VAR: &str = "PHONEMETA_SINGLE_FILE";
pub const PHONEMETA_LAZY_VAR: &str = "PHONEMETA_LAZY";
pub const PHONEMETA_CONFIG_VAR: &str = "PHONEMETA_CONFIG";

// Default directory holding metadata files
pub const DEFAULT_DATA_DIR: &str = "data";
