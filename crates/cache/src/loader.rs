//! Metadata loader port
//!
//! The host supplies bytes for a logical file name. A missing file and a
//! malformed name look the same to the caches: both are `None`.

use crate::codec;
use parking_lot::Mutex;
use phonemeta_core::{MetadataBundle, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Byte stream handed out by a loader. Dropping it releases the resource.
pub type MetadataStream = Box<dyn Read + Send>;

/// Source of raw metadata blobs
pub trait MetadataLoader: Send + Sync {
    /// Open the blob stored under `name`, or `None` when there is none
    fn load(&self, name: &str) -> Option<MetadataStream>;
}

impl<F> MetadataLoader for F
where
    F: Fn(&str) -> Option<MetadataStream> + Send + Sync,
{
    fn load(&self, name: &str) -> Option<MetadataStream> {
        self(name)
    }
}

/// A name is a single plain path component
pub fn is_well_formed_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
}

/// Loads blobs from files directly under a root directory
#[derive(Debug, Clone)]
pub struct FileSystemLoader {
    root: PathBuf,
}

impl FileSystemLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MetadataLoader for FileSystemLoader {
    fn load(&self, name: &str) -> Option<MetadataStream> {
        if !is_well_formed_name(name) {
            tracing::debug!(name, "rejecting malformed metadata name");
            return None;
        }

        let path = self.root.join(name);
        // Open directly instead of checking existence first (avoids TOCTOU)
        match File::open(&path) {
            Ok(file) => Some(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "metadata file not found");
                None
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to open metadata file");
                None
            }
        }
    }
}

/// Serves blobs held in memory and counts every request per name
#[derive(Debug, Default)]
pub struct InMemoryLoader {
    blobs: HashMap<String, Arc<[u8]>>,
    requests: Mutex<HashMap<String, usize>>,
}

impl InMemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bytes(mut self, name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.blobs.insert(name.into(), bytes.into());
        self
    }

    /// Encode `bundle` and serve it under `name`
    pub fn with_bundle(self, name: impl Into<String>, bundle: &MetadataBundle) -> Result<Self> {
        let blob = codec::encode(bundle)?;
        Ok(self.with_bytes(name, blob))
    }

    /// Number of `load` calls made for `name`, found or not
    pub fn load_count(&self, name: &str) -> usize {
        self.requests.lock().get(name).copied().unwrap_or(0)
    }

    /// Number of `load` calls made for any name
    pub fn total_loads(&self) -> usize {
        self.requests.lock().values().sum()
    }
}

impl MetadataLoader for InMemoryLoader {
    fn load(&self, name: &str) -> Option<MetadataStream> {
        *self.requests.lock().entry(name.to_string()).or_insert(0) += 1;
        self.blobs
            .get(name)
            .map(|blob| Box::new(Cursor::new(Arc::clone(blob))) as MetadataStream)
    }
}
