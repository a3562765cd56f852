//! Wallet service - creation and read access.

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    error::WalletError,
    models::{
        transaction::Transaction,
        wallet::{NewWallet, Wallet},
    },
    repository::DynWalletStore,
};

pub struct WalletService {
    store: DynWalletStore,
    default_balance: Decimal,
}

impl WalletService {
    /// `default_balance` is the starting balance of every wallet this
    /// service creates (`Config::default_balance`).
    pub fn new(store: DynWalletStore, default_balance: Decimal) -> Self {
        Self {
            store,
            default_balance,
        }
    }

    /// Create a wallet holding the configured default balance.
    pub async fn create_wallet_with_default_balance(&self) -> Result<Wallet, WalletError> {
        let wallet = self
            .store
            .create_wallet(NewWallet {
                balance: self.default_balance,
            })
            .await?;

        info!(wallet_id = %wallet.id, balance = %wallet.balance, "Wallet created");

        Ok(wallet)
    }

    pub async fn get_wallet_by_id(&self, id: &str) -> Result<Wallet, WalletError> {
        self.store.get_wallet_by_id(id).await
    }

    pub async fn get_history_by_id(&self, id: &str) -> Result<Vec<Transaction>, WalletError> {
        self.store.get_history_by_id(id).await
    }

    /// Check that the backing store is reachable.
    pub async fn ping(&self) -> Result<(), WalletError> {
        self.store.ping().await
    }
}
