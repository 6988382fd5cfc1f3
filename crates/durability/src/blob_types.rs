//! Blob format types: header layout, collection ids, and errors.
//!
//! Every collection persists as one blob file laid out as:
//!
//! ```text
//! +----------------------+
//! | Magic (8 bytes)      |  "PARCELDB"
//! +----------------------+
//! | Version (4 bytes)    |  Format version, little-endian
//! +----------------------+
//! | Collection id (1)    |  Which collection the payload holds
//! +----------------------+
//! | Timestamp (8)        |  Microseconds since epoch at write time
//! +----------------------+
//! | Record count (8)     |  Number of records in the payload
//! +----------------------+
//! | Payload length (8)   |  Byte length of the bincode payload
//! +----------------------+
//! | Payload              |  bincode-encoded record vector
//! +----------------------+
//! | CRC32 (4 bytes)      |  Checksum of header + payload
//! +----------------------+
//! ```
//!
//! All integers are little-endian.

use thiserror::Error;

/// Magic bytes identifying a parceldb collection blob.
pub const BLOB_MAGIC: &[u8; 8] = b"PARCELDB";

/// Blob format version 1.
pub const BLOB_VERSION_1: u32 = 1;

/// Header size: Magic(8) + Version(4) + CollectionId(1) + Timestamp(8)
/// + RecordCount(8) + PayloadLen(8)
pub const BLOB_HEADER_SIZE: usize = 37;

/// Minimum plausible blob size: header plus the CRC32 trailer.
pub const MIN_BLOB_SIZE: usize = BLOB_HEADER_SIZE + 4;

/// Collection ids used in blob headers.
pub mod collection_ids {
    /// Package orders
    pub const PACKAGES: u8 = 1;
    /// Users
    pub const USERS: u8 = 2;
    /// Shipping transactions
    pub const TRANSACTIONS: u8 = 3;

    /// Human-readable name for a collection id.
    pub fn name(id: u8) -> &'static str {
        match id {
            PACKAGES => "packages",
            USERS => "users",
            TRANSACTIONS => "transactions",
            _ => "unknown",
        }
    }
}

/// Result type for blob operations.
pub type BlobResult<T> = std::result::Result<T, BlobError>;

/// Errors raised while encoding or decoding a collection blob.
#[derive(Debug, Error)]
pub enum BlobError {
    /// File shorter than the fixed header and trailer.
    #[error("blob too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// File length disagrees with the payload length in the header.
    #[error("blob length mismatch: header implies {expected} bytes, file holds {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Leading bytes are not the blob magic.
    #[error("invalid magic bytes: expected PARCELDB, found {found:?}")]
    InvalidMagic { found: Vec<u8> },

    /// Format version this build does not understand.
    #[error("unsupported blob version: {0}")]
    UnsupportedVersion(u32),

    /// Blob holds a different collection than the caller asked for.
    #[error(
        "blob holds the {} collection, expected {}",
        collection_ids::name(*found),
        collection_ids::name(*expected)
    )]
    CollectionMismatch { expected: u8, found: u8 },

    /// Stored CRC32 does not match the file contents.
    #[error("checksum mismatch: stored {stored:08x}, computed {computed:08x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    /// Payload decoded, but to a different number of records than the
    /// header promised.
    #[error("record count mismatch: header says {header}, payload decodes to {decoded}")]
    RecordCountMismatch { header: u64, decoded: u64 },

    /// Payload failed to serialize.
    #[error("encode error: {0}")]
    Encode(String),

    /// Payload failed to deserialize.
    #[error("decode error: {0}")]
    Decode(String),

    /// Underlying filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parsed blob header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobHeader {
    pub version: u32,
    pub collection_id: u8,
    pub timestamp_micros: u64,
    pub record_count: u64,
    pub payload_len: u64,
}

impl BlobHeader {
    /// Header for a fresh write, stamped with the current wall clock.
    pub fn new(collection_id: u8, record_count: u64, payload_len: u64) -> Self {
        BlobHeader {
            version: BLOB_VERSION_1,
            collection_id,
            timestamp_micros: now_micros(),
            record_count,
            payload_len,
        }
    }

    /// Serialize the header to its fixed byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(BLOB_HEADER_SIZE);
        buf.extend_from_slice(BLOB_MAGIC);
        buf.extend_from_slice(&self.version.to_le_bytes());
        buf.push(self.collection_id);
        buf.extend_from_slice(&self.timestamp_micros.to_le_bytes());
        buf.extend_from_slice(&self.record_count.to_le_bytes());
        buf.extend_from_slice(&self.payload_len.to_le_bytes());
        buf
    }

    /// Parse the header from the start of a blob.
    pub fn from_bytes(data: &[u8]) -> BlobResult<Self> {
        if data.len() < BLOB_HEADER_SIZE {
            return Err(BlobError::TooShort {
                expected: BLOB_HEADER_SIZE,
                actual: data.len(),
            });
        }
        if &data[0..8] != BLOB_MAGIC {
            return Err(BlobError::InvalidMagic {
                found: data[0..8].to_vec(),
            });
        }
        let version = u32::from_le_bytes(data[8..12].try_into().unwrap());
        if version != BLOB_VERSION_1 {
            return Err(BlobError::UnsupportedVersion(version));
        }
        Ok(BlobHeader {
            version,
            collection_id: data[12],
            timestamp_micros: u64::from_le_bytes(data[13..21].try_into().unwrap()),
            record_count: u64::from_le_bytes(data[21..29].try_into().unwrap()),
            payload_len: u64::from_le_bytes(data[29..37].try_into().unwrap()),
        })
    }
}

fn now_micros() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
