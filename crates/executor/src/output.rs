//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant.

use serde::{Deserialize, Serialize};

use geoaddr_core::{Address, AddressId};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (update, delete)
    Unit,

    /// Id assigned to a newly created record
    Created {
        /// The new record's id.
        id: AddressId,
    },

    /// Optional record (get)
    MaybeAddress(Option<Address>),

    /// List of records (list, nearby)
    Addresses(Vec<Address>),

    /// Ping response
    Pong {
        /// Service version string.
        version: String,
    },
}
