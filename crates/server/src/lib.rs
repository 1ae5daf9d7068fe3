//! HTTP surface for geoaddr.
//!
//! - [`api`] - axum router mapping the JSON endpoints onto executor commands
//! - [`logging`] - tracing subscriber setup (file + stdout)
//!
//! The `geoaddr` binary in this crate wires both together with the
//! command-line flags.

pub mod api;
pub mod logging;

pub use api::{router, AppState};
pub use logging::{init_logging, settings_for, LoggingGuard};
