//! Field constraints for address records and nearby queries.
//!
//! ## Bounds
//!
//! | Input | Accepted range |
//! |-------|----------------|
//! | `name` | 1..=255 characters |
//! | record `latitude` | [-90, 90] |
//! | record `longitude` | [-90, 90] ([`LongitudePolicy::Legacy`]) or [-180, 180] ([`LongitudePolicy::Geographic`]) |
//! | query `latitude` | [-90, 90] |
//! | query `longitude` | [-180, 180] |
//! | query `distance` | > 0, finite |
//!
//! Record longitudes default to the legacy [-90, 90] bound. Existing clients
//! depend on it, so widening it is opt-in.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{Coordinate, NewAddress, ValidAddress};

/// Maximum name length, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

const LATITUDE_LIMIT: f64 = 90.0;
const LEGACY_LONGITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

/// Which range record longitudes are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongitudePolicy {
    /// [-90, 90], the bound records have always been written with
    #[default]
    Legacy,
    /// [-180, 180]
    Geographic,
}

impl LongitudePolicy {
    /// Absolute bound for this policy.
    pub fn limit(self) -> f64 {
        match self {
            LongitudePolicy::Legacy => LEGACY_LONGITUDE_LIMIT,
            LongitudePolicy::Geographic => LONGITUDE_LIMIT,
        }
    }
}

/// Checks candidate records before they reach a store.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    longitude: LongitudePolicy,
}

impl Validator {
    /// Create a validator with the given longitude policy.
    pub fn new(longitude: LongitudePolicy) -> Self {
        Self { longitude }
    }

    /// The longitude policy in effect.
    pub fn longitude_policy(&self) -> LongitudePolicy {
        self.longitude
    }

    /// Validate a candidate record.
    ///
    /// Fields are checked in declaration order; the first violation wins.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyOrTooLong`] for a bad name
    /// - [`ValidationError::OutOfRange`] for a bad coordinate
    pub fn validate(&self, candidate: NewAddress) -> Result<ValidAddress, ValidationError> {
        check_name(&candidate.name)?;
        check_range("latitude", candidate.latitude, LATITUDE_LIMIT)?;
        check_range("longitude", candidate.longitude, self.longitude.limit())?;
        Ok(ValidAddress::new_unchecked(candidate))
    }
}

/// A checked nearby query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    /// Search center
    pub center: Coordinate,
    /// Inclusive radius in kilometers
    pub radius_km: f64,
}

/// Validate nearby-query parameters.
///
/// Query longitudes always use the full [-180, 180] range, independent of the
/// record [`LongitudePolicy`].
pub fn validate_nearby(
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<NearbyQuery, ValidationError> {
    check_range("latitude", latitude, LATITUDE_LIMIT)?;
    check_range("longitude", longitude, LONGITUDE_LIMIT)?;
    if !(radius_km > 0.0 && radius_km.is_finite()) {
        return Err(ValidationError::InvalidRadius { value: radius_km });
    }
    Ok(NearbyQuery {
        center: Coordinate::new(latitude, longitude),
        radius_km,
    })
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(ValidationError::EmptyOrTooLong {
            length,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<(), ValidationError> {
    // Written so that NaN fails
    if !(-limit <= value && value <= limit) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: -limit,
            max: limit,
        });
    }
    Ok(())
}
