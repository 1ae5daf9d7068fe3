//! High-level typed wrapper for the Executor.
//!
//! The [`AddressBook`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```text
//! use geoaddr_executor::AddressBook;
//!
//! let book = AddressBook::open("./data")?;
//! let id = book.create("Cafe", "1 Main St", 40.0, -74.0)?;
//! let close = book.nearby(40.0, -74.0, 10.0)?;
//! ```

use std::path::Path;
use std::sync::Arc;

use geoaddr_core::{Address, AddressId, NewAddress};
use geoaddr_engine::{Database, GeoaddrConfig};

use crate::{Command, Error, Executor, Output, Result};

/// High-level typed wrapper for address operations.
#[derive(Clone)]
pub struct AddressBook {
    executor: Executor,
}

impl AddressBook {
    /// Open (or create) the database in `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Database::open(path)?;
        Ok(Self::from_database(db))
    }

    /// Open the database in `path` with an explicit configuration.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: GeoaddrConfig) -> Result<Self> {
        let db = Database::open_with_config(path, config)?;
        Ok(Self::from_database(db))
    }

    /// A private in-memory address book.
    pub fn ephemeral() -> Result<Self> {
        Ok(Self::from_database(Database::ephemeral()?))
    }

    /// An in-memory address book with the given settings.
    pub fn ephemeral_with_config(config: GeoaddrConfig) -> Result<Self> {
        Ok(Self::from_database(Database::ephemeral_with_config(config)?))
    }

    /// Wrap an already opened database.
    pub fn from_database(db: Arc<Database>) -> Self {
        Self {
            executor: Executor::new(db),
        }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Create a record; returns its id.
    pub fn create(
        &self,
        name: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressId> {
        match self.executor.execute(Command::AddressCreate {
            address: NewAddress::new(name, address, latitude, longitude),
        })? {
            Output::Created { id } => Ok(id),
            _ => Err(unexpected("AddressCreate")),
        }
    }

    /// Replace every field of record `id`.
    pub fn update(&self, id: AddressId, address: NewAddress) -> Result<()> {
        match self
            .executor
            .execute(Command::AddressUpdate { id, address })?
        {
            Output::Unit => Ok(()),
            _ => Err(unexpected("AddressUpdate")),
        }
    }

    /// Delete record `id`.
    pub fn delete(&self, id: AddressId) -> Result<()> {
        match self.executor.execute(Command::AddressDelete { id })? {
            Output::Unit => Ok(()),
            _ => Err(unexpected("AddressDelete")),
        }
    }

    /// Read record `id`.
    pub fn get(&self, id: AddressId) -> Result<Option<Address>> {
        match self.executor.execute(Command::AddressGet { id })? {
            Output::MaybeAddress(found) => Ok(found),
            _ => Err(unexpected("AddressGet")),
        }
    }

    /// Every stored record.
    pub fn list(&self) -> Result<Vec<Address>> {
        match self.executor.execute(Command::AddressList)? {
            Output::Addresses(all) => Ok(all),
            _ => Err(unexpected("AddressList")),
        }
    }

    /// Records within `distance_km` of the given point.
    pub fn nearby(&self, latitude: f64, longitude: f64, distance_km: f64) -> Result<Vec<Address>> {
        match self.executor.execute(Command::AddressNearby {
            latitude,
            longitude,
            distance_km,
        })? {
            Output::Addresses(found) => Ok(found),
            _ => Err(unexpected("AddressNearby")),
        }
    }
}

fn unexpected(command: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {command}"),
    }
}
