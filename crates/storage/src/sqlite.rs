//! SQLite-backed address store.
//!
//! Each [`SqliteStore`] wraps exactly one `rusqlite::Connection`. Opening one
//! is cheap enough to do per request, and dropping it closes the connection
//! on every exit path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use tracing::debug;

use geoaddr_core::{Address, AddressId, Error, Result, ValidAddress};

use crate::store::AddressStore;

/// Default time a connection waits on a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

static MEMORY_DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Map a SQLite failure into the domain storage error.
pub(crate) fn storage_err(e: rusqlite::Error) -> Error {
    Error::storage(e)
}

/// Where a store's data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A database file on disk
    File(PathBuf),
    /// A named shared-cache in-memory database
    ///
    /// The data lives as long as at least one connection to it is open.
    /// Concurrent connections contend on table locks (`SQLITE_LOCKED`),
    /// which `busy_timeout` does not retry; share one connection instead.
    Memory(String),
}

impl StoreLocation {
    /// A file-backed location.
    pub fn file(path: impl AsRef<Path>) -> Self {
        StoreLocation::File(path.as_ref().to_path_buf())
    }

    /// A fresh, uniquely named in-memory location.
    pub fn unique_memory() -> Self {
        let n = MEMORY_DB_COUNTER.fetch_add(1, Ordering::Relaxed);
        StoreLocation::Memory(format!("geoaddr-{}-{}", std::process::id(), n))
    }

    fn open_connection(&self) -> rusqlite::Result<Connection> {
        match self {
            StoreLocation::File(path) => Connection::open(path),
            StoreLocation::Memory(name) => Connection::open_with_flags(
                format!("file:{name}?mode=memory&cache=shared"),
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
        }
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreLocation::File(path) => write!(f, "{}", path.display()),
            StoreLocation::Memory(name) => write!(f, "memory:{name}"),
        }
    }
}

/// An address store over a single SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a connection to `location`.
    ///
    /// Does not create the schema; see [`crate::bootstrap`].
    pub fn open(location: &StoreLocation, busy_timeout: Duration) -> Result<Self> {
        let conn = location.open_connection().map_err(storage_err)?;
        conn.busy_timeout(busy_timeout).map_err(storage_err)?;
        debug!(%location, "store handle opened");
        Ok(Self { conn })
    }

    /// Open a connection and bootstrap the schema on it.
    pub fn open_and_bootstrap(location: &StoreLocation, busy_timeout: Duration) -> Result<Self> {
        let store = Self::open(location, busy_timeout)?;
        crate::schema::bootstrap(&store.conn)?;
        Ok(store)
    }

    /// Borrow the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn row_to_address(row: &Row<'_>) -> rusqlite::Result<Address> {
    Ok(Address {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
    })
}

impl AddressStore for SqliteStore {
    fn create(&self, record: &ValidAddress) -> Result<AddressId> {
        self.conn
            .execute(
                "INSERT INTO addresses (name, address, latitude, longitude) VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.name(),
                    record.address(),
                    record.latitude(),
                    record.longitude()
                ],
            )
            .map_err(storage_err)?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: AddressId, record: &ValidAddress) -> Result<usize> {
        self.conn
            .execute(
                "UPDATE addresses SET name = ?1, address = ?2, latitude = ?3, longitude = ?4 WHERE id = ?5",
                params![
                    record.name(),
                    record.address(),
                    record.latitude(),
                    record.longitude(),
                    id
                ],
            )
            .map_err(storage_err)
    }

    fn delete(&self, id: AddressId) -> Result<usize> {
        self.conn
            .execute("DELETE FROM addresses WHERE id = ?1", params![id])
            .map_err(storage_err)
    }

    fn scan_all(&self) -> Result<Vec<Address>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, address, latitude, longitude FROM addresses ORDER BY id")
            .map_err(storage_err)?;
        let rows = stmt.query_map([], row_to_address).map_err(storage_err)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(storage_err)
    }

    fn get(&self, id: AddressId) -> Result<Option<Address>> {
        self.conn
            .query_row(
                "SELECT id, name, address, latitude, longitude FROM addresses WHERE id = ?1",
                params![id],
                row_to_address,
            )
            .optional()
            .map_err(storage_err)
    }
}
