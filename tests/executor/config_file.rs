//! Config file handling across database reopen.

use std::fs;

use crate::common::*;
use geoaddr::{Command, Database, Error, Executor, GeoaddrConfig};

#[test]
fn open_writes_default_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let db = Database::open(dir.path()).unwrap();

    let path = dir.path().join("geoaddr.toml");
    assert!(path.exists());
    assert_eq!(db.config(), &GeoaddrConfig::default());
    assert!(dir.path().join("addresses.db").exists());
}

#[test]
fn edited_config_is_honored_on_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    drop(Database::open(dir.path()).unwrap());

    fs::write(
        dir.path().join("geoaddr.toml"),
        "database = \"book.db\"\n\n[store]\nrequire_existing_id = true\n",
    )
    .unwrap();

    let executor = Executor::new(Database::open(dir.path()).unwrap());
    assert_eq!(
        executor.execute(Command::AddressDelete { id: 3 }),
        Err(Error::AddressNotFound { id: 3 })
    );
    create(&executor, record("Cafe", 1.0, 1.0));
    assert!(dir.path().join("book.db").exists());
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let id = {
        let executor = Executor::new(Database::open(dir.path()).unwrap());
        create(&executor, record("Cafe", 40.0, -74.0))
    };

    let executor = Executor::new(Database::open(dir.path()).unwrap());
    assert_eq!(nearby_ids(&executor, 40.0, -74.0, 1.0), vec![id]);
}

#[test]
fn malformed_config_fails_open() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("geoaddr.toml"), "busy_timeout_ms = \"soon\"").unwrap();
    assert!(Database::open(dir.path()).is_err());
}
