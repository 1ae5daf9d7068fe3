//! Behavioral properties of the address service.

use crate::common::*;
use geoaddr::{distance_km, Command, Coordinate, Output};

#[test]
fn create_then_scan_contains_identical_record() {
    let executor = create_executor();
    let first = create(&executor, record("Cafe", 40.0, -74.0));
    let second = create(&executor, record("Cafe", 40.0, -74.0));
    assert_ne!(first, second, "each create gets a fresh id");

    let all = list(&executor);
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|a| a.matches(&record("Cafe", 40.0, -74.0))));
}

#[test]
fn update_replaces_everything_but_id() {
    let executor = create_executor();
    let id = create(&executor, record("Cafe", 40.0, -74.0));
    let other = create(&executor, record("Other", 0.0, 0.0));

    let replacement = geoaddr::NewAddress::new("Diner", "5 Elm St", -33.9, 18.4);
    executor
        .execute(Command::AddressUpdate {
            id,
            address: replacement.clone(),
        })
        .unwrap();

    let all = list(&executor);
    let updated = all.iter().find(|a| a.id == id).unwrap();
    assert!(updated.matches(&replacement));
    let untouched = all.iter().find(|a| a.id == other).unwrap();
    assert!(untouched.matches(&record("Other", 0.0, 0.0)));
}

#[test]
fn delete_of_missing_id_leaves_store_unchanged() {
    let executor = create_executor();
    create(&executor, record("Cafe", 40.0, -74.0));

    assert_eq!(
        executor.execute(Command::AddressDelete { id: 4242 }),
        Ok(Output::Unit)
    );
    assert_eq!(list(&executor).len(), 1);
}

#[test]
fn nearby_matches_brute_force_filter() {
    let executor = create_executor();
    let points = [
        (40.0, -74.0),
        (40.05, -74.0),
        (40.1, -74.1),
        (40.5, -73.5),
        (41.0, -74.0),
        (-40.0, 74.0),
    ];
    for (i, (lat, lon)) in points.iter().enumerate() {
        create(&executor, record(&format!("p{}", i), *lat, *lon));
    }

    let center = Coordinate::new(40.0, -74.0);
    for radius in [0.5, 6.0, 15.0, 80.0, 200.0, 20_000.0] {
        let expected: Vec<_> = list(&executor)
            .into_iter()
            .filter(|a| distance_km(center, a.coordinate()) <= radius)
            .map(|a| a.id)
            .collect();
        assert_eq!(nearby_ids(&executor, 40.0, -74.0, radius), expected, "radius {}", radius);
    }
}

#[test]
fn nearby_boundary_is_inclusive() {
    let executor = create_executor();
    let id = create(&executor, record("Edge", 40.2, -74.0));

    let exact = distance_km(Coordinate::new(40.0, -74.0), Coordinate::new(40.2, -74.0));
    assert_eq!(nearby_ids(&executor, 40.0, -74.0, exact), vec![id]);
    assert!(nearby_ids(&executor, 40.0, -74.0, exact * 0.999).is_empty());
}

#[test]
fn distance_identity_and_symmetry() {
    let a = Coordinate::new(40.0, -74.0);
    let b = Coordinate::new(51.5, -0.12);
    assert_eq!(distance_km(a, a), 0.0);
    assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-6);
}

#[test]
fn cafe_end_to_end() {
    let executor = create_executor();
    let cafe = create(&executor, geoaddr::NewAddress::new("Cafe", "1 Main St", 40.0, -74.0));
    let north = create(&executor, record("North", 40.45, -74.0));

    assert_eq!(nearby_ids(&executor, 40.0, -74.0, 10.0), vec![cafe]);
    assert_eq!(nearby_ids(&executor, 40.0, -74.0, 1000.0), vec![cafe, north]);
}
