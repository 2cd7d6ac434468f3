//! API Response types
//!
//! Every operation returns the same envelope, success or failure, so callers
//! always get a definite verdict plus a human-readable message.

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// ```json
/// {
///     "success": true,
///     "message": "Time entry added successfully.",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Operation verdict
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Response data (null on failure)
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a failure response
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
