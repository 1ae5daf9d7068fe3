//! Concurrent commands against one on-disk database.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::common::*;
use geoaddr::{Command, Database, Executor};

#[test]
fn concurrent_creates_all_land_with_distinct_ids() {
    let dir = tempfile::TempDir::new().unwrap();
    let executor = Executor::new(Database::open(dir.path()).unwrap());

    let threads = 8;
    let per_thread = 10;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let executor = executor.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..per_thread)
                    .map(|i| create(&executor, record(&format!("t{}-{}", t, i), 10.0, 10.0)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), threads * per_thread);
    assert_eq!(list(&executor).len(), threads * per_thread);
}

#[test]
fn concurrent_commands_on_ephemeral_database_all_succeed() {
    let executor = create_executor();

    let threads = 8;
    let per_thread = 25;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let executor = executor.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    executor
                        .execute(Command::AddressCreate {
                            address: record(&format!("t{}-{}", t, i), 10.0, 10.0),
                        })
                        .unwrap();
                    executor
                        .execute(Command::AddressNearby {
                            latitude: 10.0,
                            longitude: 10.0,
                            distance_km: 5.0,
                        })
                        .unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(list(&executor).len(), threads * per_thread);
}

#[test]
fn readers_see_committed_writes_only() {
    let dir = tempfile::TempDir::new().unwrap();
    let executor = Executor::new(Database::open(dir.path()).unwrap());
    create(&executor, record("seed", 0.0, 0.0));

    let writer = {
        let executor = executor.clone();
        thread::spawn(move || {
            for i in 0..20 {
                create(&executor, record(&format!("w{}", i), 0.0, 0.0));
            }
        })
    };

    // Every read sees a whole number of complete records
    for _ in 0..20 {
        let all = list(&executor);
        assert!(!all.is_empty());
        assert!(all.iter().all(|a| a.address == "1 Main St"));
    }
    writer.join().unwrap();
    assert_eq!(list(&executor).len(), 21);
}

#[test]
fn ephemeral_databases_are_isolated() {
    let a = create_executor();
    let b = create_executor();
    create(&a, record("only-in-a", 0.0, 0.0));
    assert!(list(&b).is_empty());
}

#[test]
fn dropping_database_releases_ephemeral_data() {
    let db = create_db();
    let executor = Executor::new(db);
    create(&executor, record("x", 0.0, 0.0));
    drop(executor);

    // A new ephemeral database never sees old data
    assert!(list(&create_executor()).is_empty());
}

#[test]
fn batch_failure_does_not_abort_batch() {
    let executor = create_executor();
    let results = executor.execute_many(vec![
        Command::AddressCreate {
            address: record("", 0.0, 0.0),
        },
        Command::AddressDelete { id: 1 },
        Command::AddressCreate {
            address: record("ok", 0.0, 0.0),
        },
    ]);
    assert!(results[0].is_err());
    assert!(results[1].is_ok());
    assert!(results[2].is_ok());
}
