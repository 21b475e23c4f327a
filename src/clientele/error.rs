use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AddressId, CustomerId};

/// The result codes surfaced to callers through the envelope.
///
/// Serialized in the wire casing (`DUPLICATE_EMAIL`, ...) so a UI can match
/// on them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Success,
    DuplicateEmail,
    DuplicatePhone,
    DuplicateAddress,
    CustomerNotFound,
    AddressNotFound,
    DataIntegrityError,
    InternalServerError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            ErrorCode::Success => "SUCCESS",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::DuplicatePhone => "DUPLICATE_PHONE",
            ErrorCode::DuplicateAddress => "DUPLICATE_ADDRESS",
            ErrorCode::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            ErrorCode::AddressNotFound => "ADDRESS_NOT_FOUND",
            ErrorCode::DataIntegrityError => "DATA_INTEGRITY_ERROR",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        };
        f.write_str(code)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Phone number already in use: {0}")]
    DuplicatePhone(String),

    #[error("An identical address already exists for this customer")]
    DuplicateAddress,

    #[error("Customer {0} must retain at least one address")]
    LastAddress(CustomerId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl StoreError {
    /// The wire code for this error. Infrastructure failures all collapse
    /// into `INTERNAL_SERVER_ERROR`; domain rejections keep their own code.
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::CustomerNotFound(_) => ErrorCode::CustomerNotFound,
            StoreError::AddressNotFound(_) => ErrorCode::AddressNotFound,
            StoreError::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            StoreError::DuplicatePhone(_) => ErrorCode::DuplicatePhone,
            StoreError::DuplicateAddress => ErrorCode::DuplicateAddress,
            StoreError::LastAddress(_) => ErrorCode::DataIntegrityError,
            StoreError::Io(_) | StoreError::Serialization(_) | StoreError::Store(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_code() {
        assert_eq!(
            StoreError::DuplicateEmail("a@b.com".into()).code(),
            ErrorCode::DuplicateEmail
        );
        assert_eq!(StoreError::LastAddress(7).code(), ErrorCode::DataIntegrityError);
        assert_eq!(StoreError::CustomerNotFound(1).code(), ErrorCode::CustomerNotFound);
    }

    #[test]
    fn infrastructure_errors_map_to_internal() {
        let io = StoreError::Io(std::io::Error::other("disk gone"));
        assert_eq!(io.code(), ErrorCode::InternalServerError);
        assert_eq!(
            StoreError::Store("backend down".into()).code(),
            ErrorCode::InternalServerError
        );
    }

    #[test]
    fn codes_serialize_in_wire_casing() {
        let json = serde_json::to_string(&ErrorCode::DataIntegrityError).unwrap();
        assert_eq!(json, "\"DATA_INTEGRITY_ERROR\"");
        let json = serde_json::to_string(&ErrorCode::Success).unwrap();
        assert_eq!(json, "\"SUCCESS\"");
    }
}
