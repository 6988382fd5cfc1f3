//! Store configuration: where the collection blobs live.

use std::path::{Path, PathBuf};

/// File name of the package-order blob.
pub const PACKAGES_BLOB: &str = "packages.blob";
/// File name of the user blob.
pub const USERS_BLOB: &str = "users.blob";
/// File name of the transaction blob.
pub const TRANSACTIONS_BLOB: &str = "transactions.blob";

/// Filesystem layout of one store: a data directory holding one blob
/// per collection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        StoreConfig {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn packages_path(&self) -> PathBuf {
        self.data_dir.join(PACKAGES_BLOB)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_BLOB)
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.data_dir.join(TRANSACTIONS_BLOB)
    }
}
