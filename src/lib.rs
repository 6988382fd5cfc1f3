//! Parceldb - validated, persistent record collections for a small
//! shipping counter.
//!
//! Three collections are held fully in memory: package orders, users,
//! and completed shipping transactions. Every field is validated on the
//! way in, keyed collections stay sorted ascending by identity key, and
//! each collection is flushed to one checksummed blob file when the
//! store closes.
//!
//! # Quick Start
//!
//! ```ignore
//! use parceldb::{Store, StoreConfig};
//!
//! // Open (or create) a store in ./data
//! let mut store = Store::open(StoreConfig::new("./data"))?;
//!
//! // Insert a package order from raw console fields
//! store.add_package("AB123", "Box", "Fragile", "First-Class", "30", "2500")?;
//!
//! // Lookups fold tracking-number case
//! assert!(store.find_package("ab123").is_some());
//!
//! // Flush all collections back to disk
//! store.close()?;
//! ```
//!
//! # Architecture
//!
//! The layers live in their own crates: records and validation
//! (`parceldb-core`), the in-memory containers (`parceldb-storage`),
//! the blob codec (`parceldb-durability`), and the [`Store`] facade
//! (`parceldb-engine`). Only the facade and the core record types are
//! re-exported here; the containers and the codec are implementation
//! details.

pub use parceldb_core::record::{
    DrumMaterial, MailingClass, PackageDetail, PackageKind, PackageOrder, Role, Specification,
    Transaction, User, UserField,
};
pub use parceldb_core::{Error, FieldName, Result, TrackingNumber, UserId};
pub use parceldb_engine::{Store, StoreConfig};
