//! Durability layer for parceldb: one checksummed blob file per
//! collection, written atomically and validated end to end on load.

pub mod blob;
pub mod blob_types;

pub use blob::{BlobInfo, BlobReader, BlobWriter};
pub use blob_types::{
    collection_ids, BlobError, BlobHeader, BlobResult, BLOB_HEADER_SIZE, BLOB_MAGIC,
    BLOB_VERSION_1, MIN_BLOB_SIZE,
};
