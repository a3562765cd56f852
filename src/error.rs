//! Error types and HTTP error response handling.
//!
//! `WalletError` is shared by the store, the services and the handlers.
//! Each variant maps to exactly one HTTP status code, so the kind of an
//! error decides the response no matter which layer produced it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info, warn};

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Lookup Errors**: the requested wallet (or transfer sender) is missing
/// - **Validation Errors**: a transfer request breaks a business rule
/// - **Storage Errors**: any `sqlx::Error`, tagged with the call site
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Wallet does not exist. For transfers this is the sender.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Wallet not found")]
    WalletNotFound,

    /// Transfer receiver does not exist.
    ///
    /// Returns HTTP 400 Bad Request; only a missing sender is a 404.
    #[error("Receiver wallet not found")]
    ReceiverNotFound,

    /// Transfer amount is zero or negative.
    #[error("Amount must be positive")]
    InvalidAmount,

    /// Transfer source and destination are the same wallet.
    #[error("Sender is receiver")]
    SenderIsReceiver,

    /// Sender balance is lower than the transfer amount.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Receiver balance would exceed the largest storable value.
    #[error("Balance overflow")]
    BalanceOverflow,

    /// Request body is malformed or incomplete.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Persistence failed (connectivity, constraint violation, commit).
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl WalletError {
    /// Wrap a `sqlx::Error` with the name of the failing call site.
    ///
    /// Intended for `map_err`: `.map_err(WalletError::storage("..."))`.
    pub fn storage(context: &'static str) -> impl FnOnce(sqlx::Error) -> WalletError {
        move |source| WalletError::Storage { context, source }
    }

    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WalletError::WalletNotFound => StatusCode::NOT_FOUND,
            WalletError::ReceiverNotFound
            | WalletError::InvalidAmount
            | WalletError::SenderIsReceiver
            | WalletError::InsufficientFunds
            | WalletError::BalanceOverflow
            | WalletError::InvalidRequest(_)
            | WalletError::Storage { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            WalletError::WalletNotFound => "wallet_not_found",
            WalletError::ReceiverNotFound => "receiver_not_found",
            WalletError::InvalidAmount => "invalid_amount",
            WalletError::SenderIsReceiver => "sender_is_receiver",
            WalletError::InsufficientFunds => "insufficient_funds",
            WalletError::BalanceOverflow => "balance_overflow",
            WalletError::InvalidRequest(_) => "invalid_request",
            WalletError::Storage { .. } => "storage_error",
        }
    }
}

/// Convert WalletError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "wallet_not_found",
///     "message": "Wallet not found"
///   }
/// }
/// ```
///
/// Storage errors are logged in full but answered with a generic message.
impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let message = match &self {
            WalletError::Storage { .. } => {
                error!("Storage error: {}", self);
                "A storage error occurred".to_string()
            }
            WalletError::WalletNotFound => {
                info!("Wallet not found");
                self.to_string()
            }
            _ => {
                warn!("Rejected request: {}", self);
                self.to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
