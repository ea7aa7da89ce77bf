//! Shared response envelope types for API handlers.
//!
//! Standard resource endpoints use a `{ "data": ... }` envelope via
//! [`DataResponse`]. The booking action endpoint is the exception: it
//! preserves a legacy `{ "code": "OK" | "ERROR", ... }` contract in which
//! every processed request -- including no-ops and invalid widget names --
//! answers HTTP 200 and signals its outcome through the `code` field.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// Wraps any serializable payload in the project's standard response format.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `code` value for a processed request, including no-op outcomes.
pub const CODE_OK: &str = "OK";

/// `code` value for an explicitly rejected request (invalid widget name).
pub const CODE_ERROR: &str = "ERROR";
