//! Wallet storage.
//!
//! `WalletStore` is the only seam between the services and persistence.
//! Any backend that honors its contract can stand behind the services:
//! - `PgWalletStore`: PostgreSQL via sqlx, used by the server
//! - `InMemoryWalletStore`: a process-local store with the same semantics

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::WalletError,
    models::{
        transaction::{NewTransaction, Transaction},
        wallet::{NewWallet, Wallet},
    },
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryWalletStore;
pub use postgres::PgWalletStore;

pub type DynWalletStore = Arc<dyn WalletStore>;

/// Durable, consistent storage for wallets and their transfers.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Persist a new wallet. The store assigns the id.
    async fn create_wallet(&self, wallet: NewWallet) -> Result<Wallet, WalletError>;

    /// Fetch one wallet, or `WalletNotFound`.
    async fn get_wallet_by_id(&self, id: &str) -> Result<Wallet, WalletError>;

    /// All transfers into or out of a wallet, oldest first.
    ///
    /// Fails with `WalletNotFound` if the wallet does not exist; a wallet
    /// without transfers yields an empty list.
    async fn get_history_by_id(&self, id: &str) -> Result<Vec<Transaction>, WalletError>;

    /// Debit the sender, credit the receiver and record the transfer as one
    /// atomic unit. Either every change is applied or none is.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount`: amount is not positive or does not fit
    ///   `NUMERIC(20, 2)`
    /// - `WalletNotFound`: sender does not exist
    /// - `ReceiverNotFound`: receiver does not exist
    /// - `InsufficientFunds`: sender balance is below the amount
    /// - `BalanceOverflow`: receiver balance would exceed `NUMERIC(20, 2)`
    /// - `Storage`: persistence failed; nothing was applied
    async fn transfer_funds(&self, transfer: NewTransaction) -> Result<Transaction, WalletError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), WalletError>;
}
