//! Error types for parceldb.
//!
//! Every rejected operation maps to exactly one variant here, so callers
//! can match on the reason without parsing message text. The collections
//! guarantee that any operation returning an error left every record
//! unchanged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validate::FieldName;

/// Result type alias for parceldb operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by validation, the collections, and the store.
#[derive(Debug, Error)]
pub enum Error {
    /// Insert with an identity key that is already present in the
    /// collection.
    #[error("duplicate key: {key} is already on file")]
    DuplicateKey { key: String },

    /// Raw field value that does not match the field's format rule.
    #[error("invalid {field}: {reason}")]
    InvalidFormat { field: FieldName, reason: String },

    /// Well-formed numeric value outside the field's permitted range.
    #[error("{field} out of range: {reason}")]
    OutOfRange { field: FieldName, reason: String },

    /// Discriminant string that names no known record variant.
    #[error("unknown variant {given:?}: expected one of {expected}")]
    UnknownVariant { given: String, expected: &'static str },

    /// Lookup or removal by a key that is not present.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// Update to a field outside the mutable whitelist.
    #[error("cannot update {field}: {reason}")]
    UnsupportedField { field: String, reason: String },

    /// Transaction participant whose user record has the wrong role.
    #[error("user {key} is not {expected}")]
    RoleMismatch { key: String, expected: &'static str },

    /// Date string that does not parse as MM/DD/YY.
    #[error("invalid {field}: {given:?} is not a valid MM/DD/YY date")]
    DateParse { field: FieldName, given: String },

    /// Persisted blob that exists on disk but cannot be decoded.
    #[error("corrupt collection blob {}: {reason}", path.display())]
    LoadCorrupt { path: PathBuf, reason: String },

    /// Underlying I/O failure while loading or saving a collection.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Short machine-readable code for the error kind, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Error::DuplicateKey { .. } => "duplicate_key",
            Error::InvalidFormat { .. } => "invalid_format",
            Error::OutOfRange { .. } => "out_of_range",
            Error::UnknownVariant { .. } => "unknown_variant",
            Error::KeyNotFound { .. } => "key_not_found",
            Error::UnsupportedField { .. } => "unsupported_field",
            Error::RoleMismatch { .. } => "role_mismatch",
            Error::DateParse { .. } => "date_parse",
            Error::LoadCorrupt { .. } => "load_corrupt",
            Error::Io(_) => "io",
        }
    }
}
