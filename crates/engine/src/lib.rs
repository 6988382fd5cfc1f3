//! The parceldb engine: the [`Store`] facade over the in-memory
//! collections and the blob files that persist them.
//!
//! Open loads, close saves, and everything in between is in memory.

pub mod config;
pub mod ops;
pub mod store;

pub use config::{StoreConfig, PACKAGES_BLOB, TRANSACTIONS_BLOB, USERS_BLOB};
pub use store::Store;
