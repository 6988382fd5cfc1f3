//! Store lifecycle: open, close, and the flush backstop.
//!
//! A [`Store`] owns the three in-memory collections. [`Store::open`]
//! loads them from the data directory's blobs; [`Store::close`] flushes
//! them back and consumes the store. Dropping an unclosed store still
//! attempts the flush, but can only log a failure, so callers that care
//! about save errors must call `close`.

use std::path::Path;

use parceldb_core::record::{PackageOrder, Transaction, User};
use parceldb_core::{Error, Result};
use parceldb_durability::blob::{BlobReader, BlobWriter};
use parceldb_durability::blob_types::{collection_ids, BlobError};
use parceldb_storage::{Journal, Ledger};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::StoreConfig;

/// Record store for a shipping counter: package orders, users, and
/// completed transactions.
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    pub(crate) packages: Ledger<PackageOrder>,
    pub(crate) users: Ledger<User>,
    pub(crate) transactions: Journal<Transaction>,
    closed: bool,
}

impl Store {
    /// Open the store, loading every collection blob under the data
    /// directory.
    ///
    /// A missing blob yields an empty collection. A blob that exists but
    /// cannot be decoded is a load error: nothing is repaired silently,
    /// the caller decides whether to stop or continue empty.
    pub fn open(config: StoreConfig) -> Result<Self> {
        std::fs::create_dir_all(config.data_dir())?;

        let packages = Ledger::from_records(load_collection(
            collection_ids::PACKAGES,
            &config.packages_path(),
        )?)
        .map_err(|e| corrupt(&config.packages_path(), e))?;

        let users = Ledger::from_records(load_collection(
            collection_ids::USERS,
            &config.users_path(),
        )?)
        .map_err(|e| corrupt(&config.users_path(), e))?;

        let transactions = Journal::from_entries(load_collection(
            collection_ids::TRANSACTIONS,
            &config.transactions_path(),
        )?);

        info!(
            data_dir = %config.data_dir().display(),
            packages = packages.len(),
            users = users.len(),
            transactions = transactions.len(),
            "store opened"
        );

        Ok(Store {
            config,
            packages,
            users,
            transactions,
            closed: false,
        })
    }

    /// A store with no records, for continuing after a reported load
    /// failure. Closing it overwrites whatever blobs are on disk.
    pub fn empty(config: StoreConfig) -> Self {
        Store {
            config,
            packages: Ledger::new(),
            users: Ledger::new(),
            transactions: Journal::new(),
            closed: false,
        }
    }

    /// Flush all three collections to disk and consume the store.
    pub fn close(mut self) -> Result<()> {
        self.save_all()?;
        self.closed = true;
        info!(data_dir = %self.config.data_dir().display(), "store closed");
        Ok(())
    }

    /// All package orders, ascending by tracking number.
    pub fn packages(&self) -> &[PackageOrder] {
        self.packages.records()
    }

    /// All users, ascending by id number.
    pub fn users(&self) -> &[User] {
        self.users.records()
    }

    /// All transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.entries()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn save_all(&self) -> Result<()> {
        let mut writer = BlobWriter::new();
        writer
            .write_atomic(
                collection_ids::PACKAGES,
                self.packages.records(),
                &self.config.packages_path(),
            )
            .map_err(write_error)?;
        writer
            .write_atomic(
                collection_ids::USERS,
                self.users.records(),
                &self.config.users_path(),
            )
            .map_err(write_error)?;
        writer
            .write_atomic(
                collection_ids::TRANSACTIONS,
                self.transactions.entries(),
                &self.config.transactions_path(),
            )
            .map_err(write_error)?;

        info!(
            packages = self.packages.len(),
            users = self.users.len(),
            transactions = self.transactions.len(),
            "collections flushed"
        );
        Ok(())
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.save_all() {
            warn!(error = %e, "store dropped without close; flush failed");
        }
    }
}

fn load_collection<R: DeserializeOwned>(collection_id: u8, path: &Path) -> Result<Vec<R>> {
    match BlobReader::read(collection_id, path) {
        Ok(Some(records)) => Ok(records),
        Ok(None) => Ok(Vec::new()),
        Err(BlobError::Io(e)) => Err(Error::Io(e)),
        Err(e) => Err(Error::LoadCorrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn corrupt(path: &Path, err: Error) -> Error {
    Error::LoadCorrupt {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn write_error(err: BlobError) -> Error {
    match err {
        BlobError::Io(e) => Error::Io(e),
        other => Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            other.to_string(),
        )),
    }
}
