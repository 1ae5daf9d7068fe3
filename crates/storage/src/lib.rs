//! Storage layer for geoaddr
//!
//! This crate owns the persisted address collection:
//! - [`AddressStore`]: the store contract (create, update, delete, full scan)
//! - [`SqliteStore`]: the SQLite implementation over a single connection
//! - [`StoreLocation`]: where a store lives (file or shared in-memory database)
//! - [`schema`]: idempotent table bootstrap
//!
//! A `SqliteStore` is a scoped handle: it is opened for one operation and
//! its connection is closed when the value is dropped.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod schema;
pub mod sqlite;
pub mod store;

pub use schema::{bootstrap, TABLE_NAME};
pub use sqlite::{SqliteStore, StoreLocation};
pub use store::AddressStore;
