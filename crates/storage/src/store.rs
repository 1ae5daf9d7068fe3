//! The address store contract.

use geoaddr_core::{Address, AddressId, Result, ValidAddress};

/// Durable keyed collection of address records.
///
/// Writes are single unconditional statements. `update` and `delete` report
/// how many rows they touched but never treat zero as an error; callers that
/// want existence checks decide that themselves.
///
/// Implementations do not re-check coordinate bounds: [`ValidAddress`] can
/// only come out of the validator.
pub trait AddressStore {
    /// Insert a record and return its newly assigned id.
    fn create(&self, record: &ValidAddress) -> Result<AddressId>;

    /// Overwrite every field of the record with `id`. Returns affected rows.
    fn update(&self, id: AddressId, record: &ValidAddress) -> Result<usize>;

    /// Remove the record with `id`. Returns affected rows.
    fn delete(&self, id: AddressId) -> Result<usize>;

    /// Every stored record, in insertion order, fully materialized.
    fn scan_all(&self) -> Result<Vec<Address>>;

    /// Point read by id.
    fn get(&self, id: AddressId) -> Result<Option<Address>>;
}
