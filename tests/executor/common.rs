//! Common test utilities for executor tests

#![allow(dead_code)]

use std::sync::Arc;

use geoaddr::{AddressId, Command, Database, Executor, NewAddress, Output};

/// Create an executor with an in-memory database
pub fn create_executor() -> Executor {
    Executor::new(create_db())
}

/// Create a database for shared use
pub fn create_db() -> Arc<Database> {
    Database::ephemeral().unwrap()
}

/// Record with a fixed street address
pub fn record(name: &str, latitude: f64, longitude: f64) -> NewAddress {
    NewAddress::new(name, "1 Main St", latitude, longitude)
}

/// Create a record and return its id
pub fn create(executor: &Executor, address: NewAddress) -> AddressId {
    match executor.execute(Command::AddressCreate { address }).unwrap() {
        Output::Created { id } => id,
        other => panic!("Expected Output::Created, got {:?}", other),
    }
}

/// Ids returned by a nearby query, in result order
pub fn nearby_ids(executor: &Executor, latitude: f64, longitude: f64, distance_km: f64) -> Vec<AddressId> {
    match executor
        .execute(Command::AddressNearby {
            latitude,
            longitude,
            distance_km,
        })
        .unwrap()
    {
        Output::Addresses(found) => found.into_iter().map(|a| a.id).collect(),
        other => panic!("Expected Output::Addresses, got {:?}", other),
    }
}

/// Every stored record
pub fn list(executor: &Executor) -> Vec<geoaddr::Address> {
    match executor.execute(Command::AddressList).unwrap() {
        Output::Addresses(all) => all,
        other => panic!("Expected Output::Addresses, got {:?}", other),
    }
}
