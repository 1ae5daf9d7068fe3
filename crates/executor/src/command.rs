//! Command enum defining all geoaddr operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};

use geoaddr_core::{AddressId, NewAddress};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Address | 5 | Create, update, delete, get, list |
/// | Query | 1 | Nearby search |
/// | Database | 1 | Liveness |
///
/// Every data command performs exactly one store operation on its own store
/// handle.
///
/// # Example
///
/// ```
/// use geoaddr_executor::{Command, NewAddress};
///
/// let cmd = Command::AddressCreate {
///     address: NewAddress::new("Cafe", "1 Main St", 40.0, -74.0),
/// };
/// assert_eq!(cmd.name(), "AddressCreate");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Address (5) ====================
    /// Validate and insert a new record.
    /// Returns: `Output::Created`
    AddressCreate {
        /// Candidate record
        address: NewAddress,
    },

    /// Validate and overwrite every field of the record with `id`.
    /// Returns: `Output::Unit`, also when no record has `id` unless the
    /// database requires existing ids.
    AddressUpdate {
        /// Target record
        id: AddressId,
        /// Replacement fields
        address: NewAddress,
    },

    /// Remove the record with `id`.
    /// Returns: `Output::Unit`, also when no record has `id` unless the
    /// database requires existing ids.
    AddressDelete {
        /// Target record
        id: AddressId,
    },

    /// Read one record.
    /// Returns: `Output::MaybeAddress`
    AddressGet {
        /// Target record
        id: AddressId,
    },

    /// Every stored record in insertion order.
    /// Returns: `Output::Addresses`
    AddressList,

    // ==================== Query (1) ====================
    /// Records within `distance_km` of (`latitude`, `longitude`).
    /// Returns: `Output::Addresses`
    AddressNearby {
        /// Center latitude, [-90, 90]
        latitude: f64,
        /// Center longitude, [-180, 180]
        longitude: f64,
        /// Inclusive radius in kilometers, > 0
        distance_km: f64,
    },

    // ==================== Database (1) ====================
    /// Liveness check.
    /// Returns: `Output::Pong`
    Ping,
}

impl Command {
    /// Variant name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddressCreate { .. } => "AddressCreate",
            Command::AddressUpdate { .. } => "AddressUpdate",
            Command::AddressDelete { .. } => "AddressDelete",
            Command::AddressGet { .. } => "AddressGet",
            Command::AddressList => "AddressList",
            Command::AddressNearby { .. } => "AddressNearby",
            Command::Ping => "Ping",
        }
    }

    /// True for commands that modify the store.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::AddressCreate { .. }
                | Command::AddressUpdate { .. }
                | Command::AddressDelete { .. }
        )
    }
}
