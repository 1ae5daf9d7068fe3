//! Address command handlers.
//!
//! - AddressCreate: validate, insert
//! - AddressUpdate: validate, unconditional update
//! - AddressDelete: unconditional delete
//! - AddressGet / AddressList: reads
//!
//! Update and delete do not check that the id exists unless the database was
//! opened with `require_existing_id`.

use std::sync::Arc;

use tracing::{error, info, warn};

use geoaddr_core::{AddressId, NewAddress};
use geoaddr_engine::Database;
use geoaddr_storage::AddressStore;

use crate::{Error, Output, Result};

/// Log a failed write with the record as submitted.
fn log_write_failure(op: &'static str, id: Option<AddressId>, record: &NewAddress, err: &Error) {
    if err.is_client_error() {
        warn!(op, ?id, %record, error = %err, "address write rejected");
    } else {
        error!(op, ?id, %record, error = %err, "address write failed");
    }
}

/// Handle AddressCreate command.
pub fn address_create(db: &Arc<Database>, address: NewAddress) -> Result<Output> {
    let valid = match db.validator().validate(address.clone()) {
        Ok(valid) => valid,
        Err(e) => {
            let err = Error::from(e);
            log_write_failure("create", None, &address, &err);
            return Err(err);
        }
    };

    let created = db.handle().and_then(|store| store.create(&valid));
    match created {
        Ok(id) => {
            info!(id, record = %valid, "Address created");
            Ok(Output::Created { id })
        }
        Err(e) => {
            let err = Error::from(e);
            log_write_failure("create", None, &address, &err);
            Err(err)
        }
    }
}

/// Handle AddressUpdate command.
pub fn address_update(db: &Arc<Database>, id: AddressId, address: NewAddress) -> Result<Output> {
    let valid = match db.validator().validate(address.clone()) {
        Ok(valid) => valid,
        Err(e) => {
            let err = Error::from(e);
            log_write_failure("update", Some(id), &address, &err);
            return Err(err);
        }
    };

    let updated = db.handle().and_then(|store| store.update(id, &valid));
    match updated {
        Ok(0) if db.require_existing_id() => {
            let err = Error::AddressNotFound { id };
            log_write_failure("update", Some(id), &address, &err);
            Err(err)
        }
        Ok(affected) => {
            info!(id, affected, record = %valid, "Address updated");
            Ok(Output::Unit)
        }
        Err(e) => {
            let err = Error::from(e);
            log_write_failure("update", Some(id), &address, &err);
            Err(err)
        }
    }
}

/// Handle AddressDelete command.
pub fn address_delete(db: &Arc<Database>, id: AddressId) -> Result<Output> {
    let deleted = db.handle().and_then(|store| store.delete(id));
    match deleted {
        Ok(0) if db.require_existing_id() => {
            warn!(id, "address delete rejected: not found");
            Err(Error::AddressNotFound { id })
        }
        Ok(affected) => {
            info!(id, affected, "Address deleted");
            Ok(Output::Unit)
        }
        Err(e) => {
            let err = Error::from(e);
            error!(id, error = %err, "address delete failed");
            Err(err)
        }
    }
}

/// Handle AddressGet command.
pub fn address_get(db: &Arc<Database>, id: AddressId) -> Result<Output> {
    let found = db.handle().and_then(|store| store.get(id)).map_err(|e| {
        let err = Error::from(e);
        error!(id, error = %err, "address read failed");
        err
    })?;
    Ok(Output::MaybeAddress(found))
}

/// Handle AddressList command.
pub fn address_list(db: &Arc<Database>) -> Result<Output> {
    let all = db.handle().and_then(|store| store.scan_all()).map_err(|e| {
        let err = Error::from(e);
        error!(error = %err, "address scan failed");
        err
    })?;
    info!(count = all.len(), "Addresses listed");
    Ok(Output::Addresses(all))
}
