//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Classified**: Each error is either the client's or the server's fault

use serde::{Deserialize, Serialize};

use geoaddr_core::AddressId;

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `InvalidInput` | Bad name, coordinate or radius |
/// | Not Found | `AddressNotFound` | Only when existing ids are required |
/// | System | `Storage`, `Io`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use geoaddr_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::InvalidInput { reason }) => {
///         println!("rejected: {}", reason);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Input failed validation
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== Not Found ====================
    /// No record with this id
    #[error("address not found: {id}")]
    AddressNotFound { id: AddressId },

    // ==================== System Errors ====================
    /// Backing store unavailable or a statement failed
    #[error("storage error: {reason}")]
    Storage { reason: String },

    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// True when the caller caused the failure and retrying unchanged won't help.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput { .. } | Error::AddressNotFound { .. }
        )
    }
}
