//! Validation bounds through the command interface.

use crate::common::*;
use geoaddr::{Command, Error, GeoaddrConfig, NewAddress};

fn rejects(executor: &geoaddr::Executor, address: NewAddress) -> bool {
    matches!(
        executor.execute(Command::AddressCreate { address }),
        Err(Error::InvalidInput { .. })
    )
}

#[test]
fn latitude_bounds() {
    let executor = create_executor();
    assert!(rejects(&executor, record("a", 91.0, 0.0)));
    assert!(rejects(&executor, record("a", -91.0, 0.0)));
    create(&executor, record("a", 90.0, 0.0));
    create(&executor, record("a", -90.0, 0.0));
}

#[test]
fn longitude_bounds_default_policy() {
    let executor = create_executor();
    assert!(rejects(&executor, record("a", 0.0, 91.0)));
    assert!(rejects(&executor, record("a", 0.0, -91.0)));
    create(&executor, record("a", 0.0, 90.0));
    create(&executor, record("a", 0.0, -90.0));
}

#[test]
fn longitude_bounds_geographic_policy() {
    let mut config = GeoaddrConfig::default();
    config.validation.geographic_longitude = true;
    let executor = geoaddr::Executor::new(geoaddr::Database::ephemeral_with_config(config).unwrap());

    create(&executor, record("a", 0.0, 180.0));
    create(&executor, record("a", 0.0, -180.0));
    assert!(rejects(&executor, record("a", 0.0, 180.1)));
}

#[test]
fn name_length_bounds() {
    let executor = create_executor();
    assert!(rejects(&executor, record("", 0.0, 0.0)));
    assert!(rejects(&executor, record(&"n".repeat(256), 0.0, 0.0)));
    create(&executor, record("n", 0.0, 0.0));
    create(&executor, record(&"n".repeat(255), 0.0, 0.0));
}

#[test]
fn name_length_counts_characters() {
    let executor = create_executor();
    // 255 multi-byte characters is still a valid name
    create(&executor, record(&"é".repeat(255), 0.0, 0.0));
    assert!(rejects(&executor, record(&"é".repeat(256), 0.0, 0.0)));
}

#[test]
fn rejected_writes_leave_no_trace() {
    let executor = create_executor();
    assert!(rejects(&executor, record("", 0.0, 0.0)));
    assert!(rejects(&executor, record("a", f64::NAN, 0.0)));
    assert!(list(&executor).is_empty());
}

#[test]
fn nearby_radius_must_be_positive() {
    let executor = create_executor();
    for distance_km in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = executor.execute(Command::AddressNearby {
            latitude: 0.0,
            longitude: 0.0,
            distance_km,
        });
        assert!(
            matches!(result, Err(Error::InvalidInput { .. })),
            "radius {} gave {:?}",
            distance_km,
            result
        );
    }
}
