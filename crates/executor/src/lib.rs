//! # geoaddr Executor
//!
//! The public API for geoaddr - a small service that stores named addresses
//! with coordinates and answers "what is near this point" queries.
//!
//! This is the only crate users need to import. It provides:
//! - [`AddressBook`] - Typed methods over the executor
//! - [`Command`]/[`Output`] - Low-level command interface (for the HTTP layer)
//! - [`Error`] - Serializable, classified errors
//!
//! ## Quick Start
//!
//! ```text
//! use geoaddr_executor::AddressBook;
//!
//! let book = AddressBook::open("./data")?;
//! book.create("Cafe", "1 Main St", 40.0, -74.0)?;
//! let close = book.nearby(40.0, -74.0, 10.0)?;
//! ```

#![warn(missing_docs)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::AddressBook;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

// Re-export core and engine types so users don't need those crates directly
pub use geoaddr_core::{distance_km, Address, AddressId, Coordinate, LongitudePolicy, NewAddress};
pub use geoaddr_engine::{Database, GeoaddrConfig, LoggingConfig, CONFIG_FILE_NAME};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
