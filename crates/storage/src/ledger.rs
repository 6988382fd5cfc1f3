//! Ordered, uniquely-keyed in-memory collection.
//!
//! A [`Ledger`] keeps its records sorted ascending by identity key at all
//! times, so iteration order is the listing order and lookups are binary
//! searches. Every mutating operation either fully applies or returns an
//! error with the ledger unchanged.

use parceldb_core::{Error, Keyed, Result};
use tracing::{debug, trace};

/// Ordered collection of records with unique identity keys.
#[derive(Debug, Clone)]
pub struct Ledger<R: Keyed> {
    records: Vec<R>,
}

impl<R: Keyed> Ledger<R> {
    pub fn new() -> Self {
        Ledger { records: Vec::new() }
    }

    /// Rebuild a ledger from records loaded off disk.
    ///
    /// The persisted order is not trusted: records are re-sorted, and a
    /// duplicate key means the blob was not produced by a ledger, so it
    /// is rejected rather than repaired.
    pub fn from_records(mut records: Vec<R>) -> Result<Self> {
        records.sort_by(|a, b| a.key().cmp(b.key()));
        for pair in records.windows(2) {
            if pair[0].key() == pair[1].key() {
                return Err(Error::DuplicateKey {
                    key: pair[1].key().to_string(),
                });
            }
        }
        debug!(records = records.len(), "ledger rebuilt from loaded records");
        Ok(Ledger { records })
    }

    /// Insert a record, keeping the ledger sorted.
    ///
    /// Rejects with `DuplicateKey` when the key is already present.
    pub fn insert(&mut self, record: R) -> Result<()> {
        match self.position(record.key()) {
            Ok(_) => Err(Error::DuplicateKey {
                key: record.key().to_string(),
            }),
            Err(at) => {
                trace!(key = %record.key(), position = at, "ledger insert");
                self.records.insert(at, record);
                Ok(())
            }
        }
    }

    /// Look up a record by key.
    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.position(key).ok().map(|i| &self.records[i])
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.position(key).is_ok()
    }

    /// Remove and return the record with the given key.
    pub fn remove(&mut self, key: &R::Key) -> Result<R> {
        match self.position(key) {
            Ok(i) => {
                trace!(key = %key, "ledger remove");
                Ok(self.records.remove(i))
            }
            Err(_) => Err(Error::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Mutate the record with the given key in place.
    ///
    /// The closure must not change the identity key. A closure that
    /// validates before assigning keeps the no-side-effects-on-error
    /// guarantee; every closure the store passes here does.
    pub fn update<F>(&mut self, key: &R::Key, f: F) -> Result<()>
    where
        F: FnOnce(&mut R) -> Result<()>,
    {
        let i = match self.position(key) {
            Ok(i) => i,
            Err(_) => {
                return Err(Error::KeyNotFound {
                    key: key.to_string(),
                })
            }
        };
        let result = f(&mut self.records[i]);
        debug_assert!(
            self.records[i].key() == key,
            "update closures must not change the identity key"
        );
        result
    }

    /// All records, ascending by key.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, key: &R::Key) -> std::result::Result<usize, usize> {
        self.records.binary_search_by(|r| r.key().cmp(key))
    }
}

impl<R: Keyed> Default for Ledger<R> {
    fn default() -> Self {
        Self::new()
    }
}
