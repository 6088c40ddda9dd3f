// Minibank - Core Library
// Exposes the account domain and HTTP layer for the server binary and tests

pub mod account;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use account::Account;
pub use error::{ApiError, BankError, OperationKind};
pub use server::{router, AppState, TransactionRequest, BIND_ADDR};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
