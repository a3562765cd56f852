//! Wallet data models.
//!
//! This module defines:
//! - `Wallet`: Database entity and API response body
//! - `NewWallet`: Values for a wallet that has not been stored yet

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a wallet record.
///
/// # Database Table
///
/// Maps to the `wallets` table. The id is generated by the store and never
/// changes; the balance only moves through transfers.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "5b53700ed469fa6a09ea72bb78f36fd9",
///   "balance": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Wallet {
    /// Opaque unique identifier
    #[schema(example = "5b53700ed469fa6a09ea72bb78f36fd9")]
    pub id: String,

    /// Current balance
    ///
    /// Never negative (enforced by the transfer path and a CHECK constraint).
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 100.0)]
    pub balance: Decimal,
}

/// A wallet about to be created.
#[derive(Debug, Clone)]
pub struct NewWallet {
    /// Starting balance
    pub balance: Decimal,
}
