//! Binary metadata codec
//!
//! Turns raw blob bytes into a [`MetadataBundle`] and back. Decoding is pure:
//! no I/O beyond draining a caller-supplied reader, no shared state.
//!
//! Layout: a [`BundleHeader`] of [`HEADER_LEN`] bytes followed by the
//! bincode-encoded record list the header describes.

mod format;

pub use format::{BundleHeader, BUNDLE_MAGIC, FORMAT_VERSION, HEADER_LEN};

use bincode::Options;
use format::wire_options;
use phonemeta_core::{Error, MetadataBundle, MetadataRecord, Result};
use std::io::Read;
use std::path::Path;

/// Decode a blob into its records
pub fn decode(bytes: &[u8]) -> Result<MetadataBundle> {
    let header = BundleHeader::from_bytes(bytes)?;
    let payload = &bytes[HEADER_LEN..];
    header.validate(payload)?;

    let records: Vec<MetadataRecord> = wire_options()
        .with_limit(payload.len() as u64)
        .deserialize(payload)
        .map_err(|e| Error::decode_with_source("", "malformed record payload", e))?;

    if records.len() as u64 != u64::from(header.record_count()) {
        return Err(Error::decode(
            "",
            format!(
                "record count mismatch: header says {}, payload holds {}",
                header.record_count(),
                records.len()
            ),
        ));
    }

    Ok(MetadataBundle::new(records))
}

/// Drain `reader` and decode what it yielded.
///
/// The reader is consumed and dropped before this returns, on success and on
/// every failure path.
pub fn decode_from_reader<R: Read>(mut reader: R) -> Result<MetadataBundle> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::decode_with_source("", "failed to read metadata stream", e))?;
    drop(reader);
    decode(&bytes)
}

/// Encode a bundle into a blob `decode` accepts
pub fn encode(bundle: &MetadataBundle) -> Result<Vec<u8>> {
    let record_count = u32::try_from(bundle.len()).map_err(|e| {
        Error::encode(format!("too many records: {}", bundle.len()), e)
    })?;

    let payload = wire_options()
        .serialize(bundle.records())
        .map_err(|e| Error::encode("failed to encode records", e))?;

    let mut blob = BundleHeader::new(record_count, &payload).to_bytes()?;
    blob.reserve_exact(payload.len());
    blob.extend_from_slice(&payload);
    Ok(blob)
}

/// Encode a bundle and write it to `path` atomically
pub fn write_bundle_file(path: &Path, bundle: &MetadataBundle) -> Result<()> {
    let blob = encode(bundle)?;
    tracing::debug!(
        path = %path.display(),
        records = bundle.len(),
        bytes = blob.len(),
        "writing metadata blob"
    );
    phonemeta_utils::write_atomic(path, &blob)
}
