//! Database engine for geoaddr
//!
//! This crate sits between the store and the command layer:
//! - Database: process-wide bootstrap and per-operation store handles
//! - GeoaddrConfig: `geoaddr.toml` settings
//! - query: the nearby-address search
//!
//! The engine is the only component that knows how configuration maps onto
//! store locations and validation policy.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod query;

pub use database::{
    Database, GeoaddrConfig, LoggingConfig, ServerConfig, StoreConfig, StoreHandle,
    ValidationConfig, CONFIG_FILE_NAME,
};
pub use query::{nearby, nearby_with_distance};
