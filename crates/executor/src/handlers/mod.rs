//! Command handlers organized by category.
//!
//! | Module | Commands | Store operation |
//! |--------|----------|-----------------|
//! | `address` | 5 | create, update, delete, get, scan |
//! | `query` | 1 | full scan + distance filter |
//!
//! Each handler acquires its own store handle from the [`Database`] and lets
//! it drop on return, whatever the outcome.
//!
//! [`Database`]: geoaddr_engine::Database

pub mod address;
pub mod query;
