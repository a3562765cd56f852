//! In-memory wallet store.
//!
//! Keeps wallets and transactions behind a single async mutex. Holding the
//! lock for the whole transfer makes each transfer atomic and serializes
//! every balance change, which is all the contract requires.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    error::WalletError,
    models::{
        money,
        transaction::{NewTransaction, Transaction},
        wallet::{NewWallet, Wallet},
    },
    repository::WalletStore,
};

#[derive(Debug, Default)]
struct Ledger {
    balances: HashMap<String, Decimal>,
    transactions: Vec<Transaction>,
}

/// `WalletStore` that lives for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryWalletStore {
    ledger: Mutex<Ledger>,
}

impl InMemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletStore for InMemoryWalletStore {
    async fn create_wallet(&self, wallet: NewWallet) -> Result<Wallet, WalletError> {
        let id = Uuid::new_v4().simple().to_string();

        let mut ledger = self.ledger.lock().await;
        ledger.balances.insert(id.clone(), wallet.balance);

        Ok(Wallet {
            id,
            balance: wallet.balance,
        })
    }

    async fn get_wallet_by_id(&self, id: &str) -> Result<Wallet, WalletError> {
        let ledger = self.ledger.lock().await;

        ledger
            .balances
            .get(id)
            .map(|balance| Wallet {
                id: id.to_string(),
                balance: *balance,
            })
            .ok_or(WalletError::WalletNotFound)
    }

    async fn get_history_by_id(&self, id: &str) -> Result<Vec<Transaction>, WalletError> {
        let ledger = self.ledger.lock().await;

        if !ledger.balances.contains_key(id) {
            return Err(WalletError::WalletNotFound);
        }

        Ok(ledger
            .transactions
            .iter()
            .filter(|t| t.from == id || t.to == id)
            .cloned()
            .collect())
    }

    async fn transfer_funds(&self, transfer: NewTransaction) -> Result<Transaction, WalletError> {
        // Same bounds as the NUMERIC(20, 2) columns in Postgres
        money::check_amount(transfer.amount)?;

        let mut ledger = self.ledger.lock().await;

        let sender_balance = *ledger
            .balances
            .get(&transfer.from)
            .ok_or(WalletError::WalletNotFound)?;

        let receiver_balance = *ledger
            .balances
            .get(&transfer.to)
            .ok_or(WalletError::ReceiverNotFound)?;

        if sender_balance < transfer.amount {
            return Err(WalletError::InsufficientFunds);
        }

        let debited = sender_balance
            .checked_sub(transfer.amount)
            .ok_or(WalletError::InsufficientFunds)?;
        let credited = receiver_balance
            .checked_add(transfer.amount)
            .filter(|balance| money::fits_money_column(*balance))
            .ok_or(WalletError::BalanceOverflow)?;

        // Nothing below can fail, so the three writes land together
        ledger.balances.insert(transfer.from.clone(), debited);
        ledger.balances.insert(transfer.to.clone(), credited);

        let transaction = Transaction {
            time: Utc::now(),
            from: transfer.from,
            to: transfer.to,
            amount: transfer.amount,
        };
        ledger.transactions.push(transaction.clone());

        Ok(transaction)
    }

    async fn ping(&self) -> Result<(), WalletError> {
        Ok(())
    }
}
