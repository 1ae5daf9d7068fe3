//! Executor Layer Tests
//!
//! Workspace-level tests through the `geoaddr` facade:
//! - Address lifecycle and nearby search properties
//! - Validation bounds at the public boundary
//! - Concurrent commands on one on-disk database
//! - Config file handling across reopen

mod common;

mod adversarial;
mod config_file;
mod properties;
mod validation_bounds;
