//! Blob header definitions
//!
//! Every metadata blob starts with a fixed-size header carrying a magic
//! number, the format version, the record count and a CRC32C of the payload.

use bincode::Options;
use crc32c::crc32c;
use phonemeta_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Magic number for metadata blobs: "PNMD" (Phone Number MetaData)
pub const BUNDLE_MAGIC: u32 = 0x504E_4D44;

/// Current blob format version
pub const FORMAT_VERSION: u16 = 1;

/// Encoded size of [`BundleHeader`]
pub const HEADER_LEN: usize = 24;

/// Fixed-width little-endian options shared by the header and the payload
pub(crate) fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(C)]
pub struct BundleHeader {
    magic: u32,
    version: u16,
    /// Reserved, always 0
    flags: u16,
    record_count: u32,
    payload_len: u64,
    payload_crc: u32,
}

impl BundleHeader {
    pub fn new(record_count: u32, payload: &[u8]) -> Self {
        Self {
            magic: BUNDLE_MAGIC,
            version: FORMAT_VERSION,
            flags: 0,
            record_count,
            payload_len: payload.len() as u64,
            payload_crc: crc32c(payload),
        }
    }

    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        wire_options()
            .serialize(self)
            .map_err(|e| Error::encode("failed to encode blob header", e))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::decode(
                "",
                format!(
                    "input is {} bytes, shorter than the {HEADER_LEN}-byte header",
                    bytes.len()
                ),
            ));
        }
        wire_options()
            .deserialize(&bytes[..HEADER_LEN])
            .map_err(|e| Error::decode_with_source("", "unreadable header", e))
    }

    /// Check the header against the payload that follows it
    pub fn validate(&self, payload: &[u8]) -> Result<()> {
        if self.magic != BUNDLE_MAGIC {
            return Err(Error::decode(
                "",
                format!(
                    "invalid magic number: expected {:08x}, got {:08x}",
                    BUNDLE_MAGIC, self.magic
                ),
            ));
        }

        if self.version > FORMAT_VERSION {
            return Err(Error::decode(
                "",
                format!("unsupported format version: {}", self.version),
            ));
        }

        if self.payload_len != payload.len() as u64 {
            return Err(Error::decode(
                "",
                format!(
                    "payload length mismatch: header says {} bytes, found {}",
                    self.payload_len,
                    payload.len()
                ),
            ));
        }

        let actual_crc = crc32c(payload);
        if self.payload_crc != actual_crc {
            return Err(Error::decode(
                "",
                format!(
                    "payload CRC mismatch: expected {:08x}, got {:08x}",
                    self.payload_crc, actual_crc
                ),
            ));
        }

        Ok(())
    }
}
