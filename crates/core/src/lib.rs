//! Core types for parceldb: identity keys, validated records, the
//! per-field rule set, and the shared error taxonomy.
//!
//! This crate has no I/O. Everything here is a pure function from raw
//! input to a typed value or an error, which is what lets the layers
//! above promise that failed operations have no side effects.

pub mod error;
pub mod key;
pub mod record;
pub mod validate;

pub use error::{Error, Result};
pub use key::{TrackingNumber, UserId, TRACKING_LEN, USER_ID_DIGITS};
pub use record::{
    DrumMaterial, Keyed, MailingClass, PackageDetail, PackageKind, PackageOrder, Role,
    Specification, Transaction, User, UserField,
};
pub use validate::{FieldName, DATE_FORMAT};
