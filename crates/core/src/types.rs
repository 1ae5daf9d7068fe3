//! Address record model.
//!
//! A record moves through three shapes:
//! - [`NewAddress`]: what a client submits, unchecked
//! - [`ValidAddress`]: a candidate that passed the [`Validator`](crate::Validator)
//! - [`Address`]: a persisted row with its store-assigned id

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned record identifier.
pub type AddressId = i64;

/// A point on the Earth's surface, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees north of the equator
    pub latitude: f64,
    /// Degrees east of the prime meridian
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Candidate address as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    /// Display name, 1 to 255 characters
    pub name: String,
    /// Free-form street address
    pub address: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl NewAddress {
    /// Convenience constructor.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for NewAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={:?} address={:?} latitude={} longitude={}",
            self.name, self.address, self.latitude, self.longitude
        )
    }
}

/// An address that passed validation.
///
/// Only [`Validator::validate`](crate::Validator::validate) can build one, so
/// every write path into a store carries checked data.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidAddress(NewAddress);

impl ValidAddress {
    pub(crate) fn new_unchecked(inner: NewAddress) -> Self {
        Self(inner)
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Street address
    pub fn address(&self) -> &str {
        &self.0.address
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.0.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.0.longitude
    }

    /// Borrow the validated fields.
    pub fn as_new(&self) -> &NewAddress {
        &self.0
    }

    /// Unwrap into the plain candidate.
    pub fn into_inner(self) -> NewAddress {
        self.0
    }
}

impl fmt::Display for ValidAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored address record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Store-assigned id, immutable once created
    pub id: AddressId,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Address {
    /// The record's position.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// True when every field but the id matches `candidate`.
    pub fn matches(&self, candidate: &NewAddress) -> bool {
        self.name == candidate.name
            && self.address == candidate.address
            && self.latitude == candidate.latitude
            && self.longitude == candidate.longitude
    }
}
