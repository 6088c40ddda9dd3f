// ❌ Error types - domain validation errors + HTTP boundary mapping
//
// Two error kinds exist in the domain: a non-positive amount and a
// withdrawal exceeding funds. Both are client errors (400). Everything
// else is a generic 500 that leaks no internal detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use thiserror::Error;

// ============================================================================
// DOMAIN ERRORS
// ============================================================================

/// Which guarded operation rejected the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "Deposit",
            OperationKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised by account operations.
///
/// A failed operation never mutates the balance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Non-positive amount passed to deposit or withdraw.
    #[error("{kind} amount must be positive")]
    InvalidAmount { kind: OperationKind },

    /// Withdrawal larger than the current balance.
    #[error("Insufficient balance")]
    InsufficientBalance,
}

// ============================================================================
// HTTP BOUNDARY
// ============================================================================

/// Error type returned by request handlers.
///
/// Domain validation errors become 400 with the human-readable detail;
/// anything unexpected becomes a generic 500.
#[derive(Debug)]
pub enum ApiError {
    Validation(BankError),
    Internal,
}

impl From<BankError> for ApiError {
    fn from(err: BankError) -> Self {
        ApiError::Validation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
