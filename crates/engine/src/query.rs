//! Nearby-address query.
//!
//! A query reads the whole table and keeps every record whose geodesic
//! distance from the center is at most the radius. There is no index and no
//! early exit: cost is linear in the number of stored records, which is the
//! intended trade-off for an address book of this size.

use geoaddr_core::{distance_km, Address, NearbyQuery, Result};
use geoaddr_storage::AddressStore;

/// Records within `query.radius_km` of `query.center`, in scan order.
///
/// The boundary is inclusive: a record exactly `radius_km` away is returned.
pub fn nearby<S>(store: &S, query: &NearbyQuery) -> Result<Vec<Address>>
where
    S: AddressStore + ?Sized,
{
    Ok(nearby_with_distance(store, query)?
        .into_iter()
        .map(|(address, _)| address)
        .collect())
}

/// Like [`nearby`], paired with each record's distance in kilometers.
pub fn nearby_with_distance<S>(store: &S, query: &NearbyQuery) -> Result<Vec<(Address, f64)>>
where
    S: AddressStore + ?Sized,
{
    let all = store.scan_all()?;
    Ok(all
        .into_iter()
        .filter_map(|address| {
            let d = distance_km(query.center, address.coordinate());
            (d <= query.radius_km).then_some((address, d))
        })
        .collect())
}
