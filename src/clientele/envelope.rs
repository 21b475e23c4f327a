use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, Result, StoreError};

/// The uniform result shape returned by every API operation.
///
/// Success and domain rejection travel the same path: callers inspect
/// `success`/`error_code` instead of catching faults. `data` is `null` on
/// failure and on operations that return nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error_code: ErrorCode,
    pub error_message: Option<String>,
    pub success: bool,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error_code: ErrorCode::Success,
            error_message: None,
            success: true,
        }
    }

    pub fn fail(error: &StoreError) -> Self {
        Self {
            data: None,
            error_code: error.code(),
            error_message: Some(error.to_string()),
            success: false,
        }
    }
}

impl<T> From<Result<T>> for Envelope<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Envelope::ok(data),
            Err(e) => Envelope::fail(&e),
        }
    }
}
