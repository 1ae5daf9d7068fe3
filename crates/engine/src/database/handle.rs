//! Store handles handed out by [`Database::handle`](super::Database::handle).

use std::ops::Deref;

use parking_lot::MutexGuard;

use geoaddr_core::{Address, AddressId, Result, ValidAddress};
use geoaddr_storage::{AddressStore, SqliteStore};

/// A store handle scoped to one operation.
///
/// File databases get a fresh connection per handle. An in-memory database
/// has a single connection, so its handle is a lock on that connection and
/// operations on it run one at a time. Either way the handle is released on
/// drop.
pub enum StoreHandle<'a> {
    /// Dedicated connection to a database file
    Owned(SqliteStore),
    /// Exclusive use of the in-memory database's connection
    Shared(MutexGuard<'a, SqliteStore>),
}

impl Deref for StoreHandle<'_> {
    type Target = SqliteStore;

    fn deref(&self) -> &SqliteStore {
        match self {
            StoreHandle::Owned(store) => store,
            StoreHandle::Shared(guard) => guard,
        }
    }
}

impl AddressStore for StoreHandle<'_> {
    fn create(&self, record: &ValidAddress) -> Result<AddressId> {
        (**self).create(record)
    }

    fn update(&self, id: AddressId, record: &ValidAddress) -> Result<usize> {
        (**self).update(id, record)
    }

    fn delete(&self, id: AddressId) -> Result<usize> {
        (**self).delete(id)
    }

    fn scan_all(&self) -> Result<Vec<Address>> {
        (**self).scan_all()
    }

    fn get(&self, id: AddressId) -> Result<Option<Address>> {
        (**self).get(id)
    }
}
