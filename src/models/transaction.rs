//! Transaction data models and API request types.
//!
//! This module defines:
//! - `Transaction`: Database entity and API response body
//! - `NewTransaction`: A transfer handed to the store
//! - `SendFundsRequest`: Request body for sending funds

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a completed transfer from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Rows are append-only: they are
/// inserted once per successful transfer and never updated or deleted.
///
/// # JSON Example
///
/// ```json
/// {
///   "time": "2024-02-04T17:25:35.448Z",
///   "from": "5b53700ed469fa6a09ea72bb78f36fd9",
///   "to": "eb376add88bf8e70f80787266a0801d5",
///   "amount": 30.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// When the transfer was executed (assigned by the store)
    #[sqlx(rename = "executed_at")]
    pub time: DateTime<Utc>,

    /// Source wallet id
    #[sqlx(rename = "from_wallet_id")]
    pub from: String,

    /// Destination wallet id
    #[sqlx(rename = "to_wallet_id")]
    pub to: String,

    /// Amount moved, always positive
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 30.0)]
    pub amount: Decimal,
}

/// A validated transfer that has not been executed yet.
///
/// The store fills in the timestamp when it records the transfer.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

/// Request to send funds from the wallet named in the URL.
///
/// # JSON Example
///
/// ```json
/// {
///   "to": "eb376add88bf8e70f80787266a0801d5",
///   "amount": 30.0
/// }
/// ```
#[derive(Debug, Deserialize, ToSchema)]
pub struct SendFundsRequest {
    /// Receiving wallet id
    pub to: String,

    /// Amount to send, positive with at most two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 30.0)]
    pub amount: Decimal,
}
