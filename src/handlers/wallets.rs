//! Wallet HTTP handlers.
//!
//! This module implements the wallet API endpoints:
//! - POST /api/v1/wallet - Create wallet with the default balance
//! - GET /api/v1/wallet/{id} - Get wallet by ID
//! - GET /api/v1/wallet/{id}/history - Get transfers into and out of a wallet
//! - POST /api/v1/wallet/{id}/send - Send funds to another wallet

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    error::WalletError,
    models::{
        transaction::{SendFundsRequest, Transaction},
        wallet::Wallet,
    },
    state::AppState,
};

/// Create a new wallet.
///
/// # Endpoint
///
/// `POST /api/v1/wallet`
///
/// # Response
///
/// - **Success (200 OK)**: the created wallet
/// - **Error (400)**: the wallet could not be stored
///
/// ```json
/// {
///   "id": "5b53700ed469fa6a09ea72bb78f36fd9",
///   "balance": 100.0
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/wallet",
    tag = "Wallet",
    responses(
        (status = 200, description = "Wallet created with the default balance", body = Wallet),
        (status = 400, description = "Wallet could not be stored")
    )
)]
pub async fn create_wallet(State(state): State<AppState>) -> Result<Json<Wallet>, WalletError> {
    let wallet = state.wallets.create_wallet_with_default_balance().await?;

    Ok(Json(wallet))
}

/// Get a wallet by ID.
///
/// # Response
///
/// - **Success (200 OK)**: the wallet and its current balance
/// - **Error (404)**: wallet not found
#[utoipa::path(
    get,
    path = "/api/v1/wallet/{id}",
    tag = "Wallet",
    params(("id" = String, Path, description = "Wallet id")),
    responses(
        (status = 200, description = "Wallet and its current balance", body = Wallet),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn get_wallet(
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<Wallet>, WalletError> {
    let wallet = state.wallets.get_wallet_by_id(&wallet_id).await?;

    Ok(Json(wallet))
}

/// Get the transfer history of a wallet.
///
/// # Response
///
/// - **Success (200 OK)**: incoming and outgoing transfers, oldest first
///   (an empty array for a wallet that never transferred)
/// - **Error (404)**: wallet not found
///
/// ```json
/// [
///   {
///     "time": "2024-02-04T17:25:35.448Z",
///     "from": "5b53700ed469fa6a09ea72bb78f36fd9",
///     "to": "eb376add88bf8e70f80787266a0801d5",
///     "amount": 30.0
///   }
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/wallet/{id}/history",
    tag = "Wallet",
    params(("id" = String, Path, description = "Wallet id")),
    responses(
        (status = 200, description = "Incoming and outgoing transfers, oldest first", body = Vec<Transaction>),
        (status = 404, description = "Wallet not found")
    )
)]
pub async fn get_wallet_history(
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<Vec<Transaction>>, WalletError> {
    let history = state.wallets.get_history_by_id(&wallet_id).await?;

    Ok(Json(history))
}

/// Send funds from the wallet in the path to another wallet.
///
/// # Request Body
///
/// ```json
/// {
///   "to": "eb376add88bf8e70f80787266a0801d5",
///   "amount": 30.0
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the recorded transaction
/// - **Error (404)**: sender wallet not found
/// - **Error (400)**: malformed body, amount not a positive number of
///   cents, sender is receiver, receiver not found, insufficient funds,
///   receiver balance overflow or storage failure
///
/// # Atomicity
///
/// Both balances and the history entry change together or not at all.
#[utoipa::path(
    post,
    path = "/api/v1/wallet/{id}/send",
    tag = "Wallet",
    params(("id" = String, Path, description = "Sending wallet id")),
    request_body = SendFundsRequest,
    responses(
        (status = 200, description = "Transfer recorded", body = Transaction),
        (status = 400, description = "Invalid body or amount, sender is receiver, receiver not found, insufficient funds or balance overflow"),
        (status = 404, description = "Sender wallet not found")
    )
)]
pub async fn send_funds(
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
    payload: Result<Json<SendFundsRequest>, JsonRejection>,
) -> Result<Json<Transaction>, WalletError> {
    // Any body problem is a 400, not axum's default 415/422
    let Json(request) = payload.map_err(|e| WalletError::InvalidRequest(e.body_text()))?;

    let transaction = state
        .transfers
        .send_funds(&wallet_id, &request.to, request.amount)
        .await?;

    Ok(Json(transaction))
}
