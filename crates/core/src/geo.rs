//! Geodesic distance on the WGS-84 ellipsoid.
//!
//! Distances are solutions of the inverse geodesic problem computed with
//! Karney's algorithm (`geographiclib-rs`). The algorithm converges for every
//! pair of points, antipodal ones included, and is accurate to a few
//! nanometres.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east
//! - Distance: kilometers

use geographiclib_rs::{Geodesic, InverseGeodesic};
use once_cell::sync::Lazy;

use crate::types::Coordinate;

static WGS84: Lazy<Geodesic> = Lazy::new(Geodesic::wgs84);

/// Geodesic distance between two points, in kilometers.
///
/// Identical points are exactly `0.0` apart. The result is exactly symmetric
/// in its arguments.
///
/// # Example
///
/// ```
/// use geoaddr_core::{distance_km, Coordinate};
///
/// // One degree of longitude along the equator.
/// let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((d - 111.319).abs() < 0.001);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    // Evaluate in a fixed argument order so both orders round the same way
    let (a, b) = if (a.latitude, a.longitude) <= (b.latitude, b.longitude) {
        (a, b)
    } else {
        (b, a)
    };
    let meters: f64 = WGS84.inverse(a.latitude, a.longitude, b.latitude, b.longitude);
    meters.max(0.0) / 1000.0
}
