//! In-memory collections for parceldb.
//!
//! Two containers cover the three record collections: the sorted,
//! uniquely-keyed [`Ledger`] (package orders and users) and the
//! append-only [`Journal`] (transactions). Neither does any I/O; loading
//! and saving are the durability layer's job.

pub mod journal;
pub mod ledger;

pub use journal::Journal;
pub use ledger::Ledger;
