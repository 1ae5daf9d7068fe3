//! Database struct and open logic
//!
//! A [`Database`] is created once per process. Opening it:
//!
//! 1. Creates the data directory if needed
//! 2. Reads or creates `geoaddr.toml`
//! 3. Bootstraps the `addresses` table (create-if-absent)
//!
//! After that the database is never touched directly. Every operation asks
//! for its own store handle with [`Database::handle`] and drops it when done.

pub mod config;
mod handle;

pub use config::{
    GeoaddrConfig, LoggingConfig, ServerConfig, StoreConfig, ValidationConfig, CONFIG_FILE_NAME,
};
pub use handle::StoreHandle;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use geoaddr_core::{Result, Validator};
use geoaddr_storage::{SqliteStore, StoreLocation};

/// Process-wide database state.
///
/// Holds only immutable settings. The one exception is the connection of an
/// ephemeral database: an in-memory database lives exactly as long as that
/// connection, and every operation borrows it under a lock.
///
/// # Example
///
/// ```text
/// use geoaddr_engine::Database;
/// use geoaddr_storage::AddressStore;
///
/// let db = Database::open("./data")?;
/// let store = db.handle()?;
/// let all = store.scan_all()?;
/// ```
pub struct Database {
    /// Data directory path (empty for ephemeral databases)
    data_dir: PathBuf,

    /// Where the SQLite data lives
    location: StoreLocation,

    /// Settings the database was opened with
    config: GeoaddrConfig,

    /// Record validator derived from the config
    validator: Validator,

    /// The only connection to an in-memory database; None for file databases
    shared: Option<Mutex<SqliteStore>>,
}

impl Database {
    /// Open the database in `path`, reading or creating `geoaddr.toml`.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created, the config is invalid, or
    /// the schema cannot be bootstrapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        GeoaddrConfig::write_default_if_missing(&config_path)?;
        let cfg = GeoaddrConfig::from_file(&config_path)?;

        Self::open_with_config(path, cfg)
    }

    /// Open the database in `path` with an explicit configuration.
    ///
    /// The config file on disk is neither read nor written.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: GeoaddrConfig) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let location = StoreLocation::file(data_dir.join(&config.database));
        // Bootstrap on a short-lived handle; dropped before we return.
        SqliteStore::open_and_bootstrap(&location, config.busy_timeout())?;

        info!(
            location = %location,
            require_existing_id = config.store.require_existing_id,
            geographic_longitude = config.validation.geographic_longitude,
            "database opened"
        );

        Ok(Arc::new(Self {
            data_dir,
            validator: Validator::new(config.longitude_policy()),
            location,
            config,
            shared: None,
        }))
    }

    /// Open a private in-memory database with default settings.
    ///
    /// Data is lost when the returned `Database` is dropped.
    pub fn ephemeral() -> Result<Arc<Self>> {
        Self::ephemeral_with_config(GeoaddrConfig::default())
    }

    /// Open a private in-memory database with the given settings.
    pub fn ephemeral_with_config(config: GeoaddrConfig) -> Result<Arc<Self>> {
        let location = StoreLocation::unique_memory();
        let store = SqliteStore::open_and_bootstrap(&location, config.busy_timeout())?;

        info!(location = %location, "ephemeral database opened");

        Ok(Arc::new(Self {
            data_dir: PathBuf::new(),
            validator: Validator::new(config.longitude_policy()),
            location,
            config,
            shared: Some(Mutex::new(store)),
        }))
    }

    /// Acquire a store handle for one operation.
    ///
    /// File databases open a new connection, so concurrent handles rely on
    /// SQLite's `busy_timeout`. Ephemeral databases block until the previous
    /// handle is dropped. Do not hold two handles of an ephemeral database on
    /// one thread.
    pub fn handle(&self) -> Result<StoreHandle<'_>> {
        match &self.shared {
            Some(store) => Ok(StoreHandle::Shared(store.lock())),
            None => SqliteStore::open(&self.location, self.config.busy_timeout())
                .map(StoreHandle::Owned),
        }
    }

    /// The validator records must pass before a write.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Whether update/delete of a missing id is reported as not found.
    pub fn require_existing_id(&self) -> bool {
        self.config.store.require_existing_id
    }

    /// Settings the database was opened with.
    pub fn config(&self) -> &GeoaddrConfig {
        &self.config
    }

    /// Data directory (empty for ephemeral databases).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Where the SQLite data lives.
    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// True for in-memory databases.
    pub fn is_ephemeral(&self) -> bool {
        matches!(self.location, StoreLocation::Memory(_))
    }
}
