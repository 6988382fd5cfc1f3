//! Whole-collection blob writer and reader.
//!
//! Saving always rewrites the entire collection: records are encoded
//! with bincode, framed by the fixed header, and finished with a CRC32
//! trailer. [`BlobWriter::write_atomic`] stages the bytes in a temp file
//! and renames it into place so a crash mid-save leaves the previous
//! blob intact. Reads validate checksum, magic, version, collection id,
//! and record count before any record reaches a collection.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::blob_types::{
    collection_ids, BlobError, BlobHeader, BlobResult, BLOB_HEADER_SIZE, MIN_BLOB_SIZE,
};

/// Outcome of a successful blob write.
#[derive(Debug, Clone)]
pub struct BlobInfo {
    pub path: PathBuf,
    pub record_count: u64,
    pub size_bytes: u64,
}

/// Writes collection blobs with a CRC32 trailer.
pub struct BlobWriter {
    hasher: crc32fast::Hasher,
}

impl BlobWriter {
    pub fn new() -> Self {
        BlobWriter {
            hasher: crc32fast::Hasher::new(),
        }
    }

    /// Serialize `records` straight into `path`.
    ///
    /// Not crash-safe on its own; use [`Self::write_atomic`] for saves
    /// that replace an existing blob.
    pub fn write<R: Serialize>(
        &mut self,
        collection_id: u8,
        records: &[R],
        path: &Path,
    ) -> BlobResult<BlobInfo> {
        debug!(
            path = %path.display(),
            collection = collection_ids::name(collection_id),
            "writing collection blob"
        );

        let payload =
            bincode::serialize(records).map_err(|e| BlobError::Encode(e.to_string()))?;
        let header = BlobHeader::new(collection_id, records.len() as u64, payload.len() as u64);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(path)?;
        self.hasher = crc32fast::Hasher::new();

        let header_bytes = header.to_bytes();
        file.write_all(&header_bytes)?;
        self.hasher.update(&header_bytes);

        file.write_all(&payload)?;
        self.hasher.update(&payload);

        let checksum = self.hasher.clone().finalize();
        file.write_all(&checksum.to_le_bytes())?;
        file.sync_all()?;

        let size_bytes = std::fs::metadata(path)?.len();
        info!(
            path = %path.display(),
            collection = collection_ids::name(collection_id),
            records = records.len(),
            size_bytes,
            "collection blob written"
        );

        Ok(BlobInfo {
            path: path.to_path_buf(),
            record_count: records.len() as u64,
            size_bytes,
        })
    }

    /// Write via a temp file and an atomic rename.
    ///
    /// A stale temp file from an earlier failed save is removed first;
    /// on rename failure the temp file is cleaned up and the original
    /// blob is untouched.
    pub fn write_atomic<R: Serialize>(
        &mut self,
        collection_id: u8,
        records: &[R],
        path: &Path,
    ) -> BlobResult<BlobInfo> {
        let temp_path = path.with_extension("blob.tmp");

        if temp_path.exists() {
            warn!(temp = %temp_path.display(), "removing stale temp blob");
            let _ = std::fs::remove_file(&temp_path);
        }

        let info = self.write(collection_id, records, &temp_path)?;

        std::fs::rename(&temp_path, path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            BlobError::Io(e)
        })?;

        Ok(BlobInfo {
            path: path.to_path_buf(),
            ..info
        })
    }
}

impl Default for BlobWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and validates collection blobs.
pub struct BlobReader;

impl BlobReader {
    /// Load one collection from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist: a fresh store,
    /// not an error. Any other failure to produce records is an error.
    pub fn read<R: DeserializeOwned>(
        collection_id: u8,
        path: &Path,
    ) -> BlobResult<Option<Vec<R>>> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    collection = collection_ids::name(collection_id),
                    "no blob on disk, starting empty"
                );
                return Ok(None);
            }
            Err(e) => return Err(BlobError::Io(e)),
        };

        let records = Self::decode(collection_id, &data)?;
        debug!(
            path = %path.display(),
            collection = collection_ids::name(collection_id),
            records = records.len(),
            "collection blob read"
        );
        Ok(Some(records))
    }

    /// Validate the CRC32 trailer of a raw blob.
    pub fn validate_checksum(data: &[u8]) -> BlobResult<()> {
        if data.len() < MIN_BLOB_SIZE {
            return Err(BlobError::TooShort {
                expected: MIN_BLOB_SIZE,
                actual: data.len(),
            });
        }
        let (content, trailer) = data.split_at(data.len() - 4);
        let stored = u32::from_le_bytes(trailer.try_into().unwrap());

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(content);
        let computed = hasher.finalize();

        if stored != computed {
            return Err(BlobError::ChecksumMismatch { stored, computed });
        }
        Ok(())
    }

    /// Decode a raw blob into records, running every validation.
    pub fn decode<R: DeserializeOwned>(collection_id: u8, data: &[u8]) -> BlobResult<Vec<R>> {
        Self::validate_checksum(data)?;
        let header = BlobHeader::from_bytes(data)?;

        if header.collection_id != collection_id {
            return Err(BlobError::CollectionMismatch {
                expected: collection_id,
                found: header.collection_id,
            });
        }

        let expected_len = BLOB_HEADER_SIZE + header.payload_len as usize + 4;
        if data.len() != expected_len {
            return Err(BlobError::LengthMismatch {
                expected: expected_len,
                actual: data.len(),
            });
        }

        let payload = &data[BLOB_HEADER_SIZE..data.len() - 4];
        let records: Vec<R> =
            bincode::deserialize(payload).map_err(|e| BlobError::Decode(e.to_string()))?;

        if records.len() as u64 != header.record_count {
            return Err(BlobError::RecordCountMismatch {
                header: header.record_count,
                decoded: records.len() as u64,
            });
        }
        Ok(records)
    }
}
