//! geoaddr - address book with geodesic nearby search
//!
//! geoaddr stores named street addresses with a latitude/longitude pair and
//! answers "which addresses lie within N kilometers of this point".
//!
//! # Quick Start
//!
//! ```ignore
//! use geoaddr::AddressBook;
//!
//! let book = AddressBook::ephemeral()?;
//! book.create("Cafe", "1 Main St", 40.0, -74.0)?;
//!
//! let close = book.nearby(40.0, -74.0, 10.0)?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based
//! API. The [`AddressBook`] struct provides a convenient typed interface. The
//! HTTP server lives in the `geoaddr-server` crate.
//!
//! Storage and engine internals are not exposed - only the executor API is
//! public.

pub use geoaddr_executor::*;
