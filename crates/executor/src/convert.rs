//! Error conversion from internal error types.
//!
//! This module provides conversions from domain errors to the executor's
//! [`Error`] type.

use crate::Error;
use geoaddr_core::ValidationError;

/// Convert a domain error to an executor Error.
impl From<geoaddr_core::Error> for Error {
    fn from(err: geoaddr_core::Error) -> Self {
        match err {
            geoaddr_core::Error::Validation(e) => e.into(),
            geoaddr_core::Error::NotFound(id) => Error::AddressNotFound { id },
            geoaddr_core::Error::Storage(reason) => Error::Storage { reason },
            geoaddr_core::Error::Config(reason) => Error::Internal { reason },
            geoaddr_core::Error::Io(e) => Error::Io {
                reason: e.to_string(),
            },
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::InvalidInput {
            reason: err.to_string(),
        }
    }
}
