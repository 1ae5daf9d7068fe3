//! The Executor - single entry point to the address service.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate handler and returns their outputs.

use std::sync::Arc;

use tracing::debug;

use geoaddr_engine::Database;

use crate::handlers::{address, query};
use crate::{Command, Output, Result};

/// The command executor - single entry point to the address service.
///
/// The Executor is **stateless**: it holds a reference to the database but
/// maintains no state of its own. Each command acquires and releases its own
/// store handle.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use geoaddr_executor::{Command, Executor, NewAddress};
///
/// let executor = Executor::new(db);
///
/// let result = executor.execute(Command::AddressCreate {
///     address: NewAddress::new("Cafe", "1 Main St", 40.0, -74.0),
/// })?;
/// ```
#[derive(Clone)]
pub struct Executor {
    db: Arc<Database>,
}

impl Executor {
    /// Create a new executor wrapping a database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// The database this executor dispatches to.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. Failures are logged by the
    /// handlers before they are returned.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), write = cmd.is_write(), "executing");
        match cmd {
            Command::Ping => Ok(Output::Pong {
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),

            // Address commands
            Command::AddressCreate { address } => address::address_create(&self.db, address),
            Command::AddressUpdate { id, address } => {
                address::address_update(&self.db, id, address)
            }
            Command::AddressDelete { id } => address::address_delete(&self.db, id),
            Command::AddressGet { id } => address::address_get(&self.db, id),
            Command::AddressList => address::address_list(&self.db),

            // Query commands
            Command::AddressNearby {
                latitude,
                longitude,
                distance_km,
            } => query::address_nearby(&self.db, latitude, longitude, distance_km),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Each command runs independently; a failure does not stop the batch.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
