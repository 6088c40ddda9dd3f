// 🌐 HTTP layer - three routes over one shared account
//
// The account lives behind Arc<Mutex<..>> so concurrent requests cannot
// interleave the read-modify-write on the balance. The lock is never held
// across an await point.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::account::Account;
use crate::error::ApiError;

/// Address the service listens on. Not configurable.
pub const BIND_ADDR: &str = "127.0.0.1:8000";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    account: Arc<Mutex<Account>>,
}

impl AppState {
    pub fn new(account: Account) -> Self {
        AppState {
            account: Arc::new(Mutex::new(account)),
        }
    }

    /// Run `f` with the account lock held.
    ///
    /// A poisoned lock is surfaced as an internal error instead of a panic.
    fn with_account<T>(&self, f: impl FnOnce(&mut Account) -> T) -> Result<T, ApiError> {
        let mut account = self.account.lock().map_err(|_| {
            error!("account lock poisoned");
            ApiError::Internal
        })?;
        Ok(f(&mut account))
    }
}

// ============================================================================
// Request / response payloads
// ============================================================================

/// Body of POST /deposit and POST /withdraw
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct BalanceResponse {
    balance: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /deposit - credit the account
async fn deposit(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.with_account(|account| account.deposit(req.amount))??;
    Ok(Json(MessageResponse { message }))
}

/// POST /withdraw - debit the account
async fn withdraw(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.with_account(|account| account.withdraw(req.amount))??;
    Ok(Json(MessageResponse { message }))
}

/// GET /check_balance - report the current balance
async fn check_balance(State(state): State<AppState>) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.with_account(|account| account.check_balance())?;
    Ok(Json(BalanceResponse { balance }))
}

/// Build the application router over the shared account state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
        .route("/check_balance", get(check_balance))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
