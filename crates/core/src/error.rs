//! Error types for geoaddr
//!
//! Client-caused failures are [`ValidationError`]s and are raised before any
//! store access. Everything the storage engine reports is folded into
//! [`Error::Storage`]. We use `thiserror` for `Display` and `Error`.

use crate::types::AddressId;
use thiserror::Error;

/// Result type alias for geoaddr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input rejected at the validation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Name is empty or longer than the allowed maximum
    #[error("name must be between 1 and {max} characters, got {length}")]
    EmptyOrTooLong {
        /// Length of the rejected name, in characters
        length: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Coordinate outside its accepted range (NaN included)
    #[error("{field} must be within the range [{min}, {max}], got {value}")]
    OutOfRange {
        /// Field name as seen by the client
        field: &'static str,
        /// Rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Search radius is not a positive finite number
    #[error("distance must be greater than 0, got {value}")]
    InvalidRadius {
        /// Rejected radius in kilometers
        value: f64,
    },
}

/// Error types for geoaddr
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed validation
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No record with the given id (only raised when existence is checked)
    #[error("address not found: {0}")]
    NotFound(AddressId),

    /// Backing store unavailable or a statement failed
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error (data directory, config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a storage error from anything displayable.
    pub fn storage(reason: impl std::fmt::Display) -> Self {
        Error::Storage(reason.to_string())
    }

    /// True when the error was caused by client input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}
