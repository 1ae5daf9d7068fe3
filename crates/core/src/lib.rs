//! Core types for geoaddr
//!
//! This crate defines the foundational pieces shared by every other crate:
//! - Address / NewAddress / ValidAddress: the record model
//! - Coordinate: a (latitude, longitude) pair in degrees
//! - geo: geodesic distance on the WGS-84 ellipsoid
//! - validation: field and query-parameter constraints
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod geo;
pub mod types;
pub mod validation;

pub use error::{Error, Result, ValidationError};
pub use geo::distance_km;
pub use types::{Address, AddressId, Coordinate, NewAddress, ValidAddress};
pub use validation::{
    validate_nearby, LongitudePolicy, NearbyQuery, Validator, MAX_NAME_LENGTH,
};
