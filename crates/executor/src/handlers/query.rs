//! Nearby query handler.

use std::sync::Arc;

use tracing::{error, info, warn};

use geoaddr_core::validate_nearby;
use geoaddr_engine::{query, Database};

use crate::{Error, Output, Result};

/// Handle AddressNearby command.
///
/// Parameters are checked before any store handle is acquired.
pub fn address_nearby(
    db: &Arc<Database>,
    latitude: f64,
    longitude: f64,
    distance_km: f64,
) -> Result<Output> {
    let q = validate_nearby(latitude, longitude, distance_km).map_err(|e| {
        let err = Error::from(e);
        warn!(latitude, longitude, distance_km, error = %err, "nearby query rejected");
        err
    })?;

    let found = db
        .handle()
        .and_then(|store| query::nearby(&store, &q))
        .map_err(|e| {
            let err = Error::from(e);
            error!(latitude, longitude, distance_km, error = %err, "nearby query failed");
            err
        })?;

    info!(
        latitude,
        longitude,
        distance_km,
        count = found.len(),
        ids = ?found.iter().map(|a| a.id).collect::<Vec<_>>(),
        "Addresses retrieved nearby"
    );
    Ok(Output::Addresses(found))
}
