//! PostgreSQL wallet store.
//!
//! # Atomicity Guarantees
//!
//! A transfer runs inside one PostgreSQL transaction. Both wallet rows are
//! locked with `FOR UPDATE` before either balance moves, so concurrent
//! transfers touching the same wallet serialize on the row lock while
//! transfers on disjoint wallets proceed independently.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    db::DbPool,
    error::WalletError,
    models::{
        money,
        transaction::{NewTransaction, Transaction},
        wallet::{NewWallet, Wallet},
    },
    repository::WalletStore,
};

/// `WalletStore` backed by the `wallets` and `transactions` tables.
#[derive(Debug, Clone)]
pub struct PgWalletStore {
    pool: DbPool,
}

impl PgWalletStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalletStore for PgWalletStore {
    async fn create_wallet(&self, wallet: NewWallet) -> Result<Wallet, WalletError> {
        // id comes from the column default
        sqlx::query_as::<_, Wallet>(
            "INSERT INTO wallets (balance) VALUES ($1) RETURNING id, balance",
        )
        .bind(wallet.balance)
        .fetch_one(&self.pool)
        .await
        .map_err(WalletError::storage("PgWalletStore::create_wallet"))
    }

    async fn get_wallet_by_id(&self, id: &str) -> Result<Wallet, WalletError> {
        sqlx::query_as::<_, Wallet>("SELECT id, balance FROM wallets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(WalletError::storage("PgWalletStore::get_wallet_by_id"))?
            .ok_or(WalletError::WalletNotFound)
    }

    async fn get_history_by_id(&self, id: &str) -> Result<Vec<Transaction>, WalletError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM wallets WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(WalletError::storage("PgWalletStore::get_history_by_id: wallet lookup"))?;

        if !exists {
            return Err(WalletError::WalletNotFound);
        }

        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT executed_at, from_wallet_id, to_wallet_id, amount
            FROM transactions
            WHERE from_wallet_id = $1 OR to_wallet_id = $1
            ORDER BY executed_at, id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(WalletError::storage("PgWalletStore::get_history_by_id: transactions"))
    }

    async fn transfer_funds(&self, transfer: NewTransaction) -> Result<Transaction, WalletError> {
        // NUMERIC(20, 2) would round a finer amount instead of rejecting it
        money::check_amount(transfer.amount)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(WalletError::storage("PgWalletStore::transfer_funds: begin"))?;

        // Lock both rows in id order so opposite-direction transfers
        // between the same pair cannot deadlock
        let locked: Vec<(String, Decimal)> = sqlx::query_as(
            "SELECT id, balance FROM wallets WHERE id = ANY($1) ORDER BY id FOR UPDATE",
        )
        .bind(vec![transfer.from.clone(), transfer.to.clone()])
        .fetch_all(&mut *tx)
        .await
        .map_err(WalletError::storage("PgWalletStore::transfer_funds: lock wallets"))?;

        let sender_balance = locked
            .iter()
            .find(|(id, _)| *id == transfer.from)
            .map(|(_, balance)| *balance);

        let Some(sender_balance) = sender_balance else {
            tx.rollback()
                .await
                .map_err(WalletError::storage("PgWalletStore::transfer_funds: rollback"))?;
            return Err(WalletError::WalletNotFound);
        };

        let receiver_balance = locked
            .iter()
            .find(|(id, _)| *id == transfer.to)
            .map(|(_, balance)| *balance);

        let Some(receiver_balance) = receiver_balance else {
            tx.rollback()
                .await
                .map_err(WalletError::storage("PgWalletStore::transfer_funds: rollback"))?;
            return Err(WalletError::ReceiverNotFound);
        };

        if sender_balance < transfer.amount {
            tx.rollback()
                .await
                .map_err(WalletError::storage("PgWalletStore::transfer_funds: rollback"))?;
            return Err(WalletError::InsufficientFunds);
        }

        let credit_fits = receiver_balance
            .checked_add(transfer.amount)
            .is_some_and(money::fits_money_column);
        if !credit_fits {
            tx.rollback()
                .await
                .map_err(WalletError::storage("PgWalletStore::transfer_funds: rollback"))?;
            return Err(WalletError::BalanceOverflow);
        }

        // Any `?` below drops `tx`, which rolls everything back
        sqlx::query("UPDATE wallets SET balance = balance - $1 WHERE id = $2")
            .bind(transfer.amount)
            .bind(&transfer.from)
            .execute(&mut *tx)
            .await
            .map_err(WalletError::storage("PgWalletStore::transfer_funds: debit sender"))?;

        sqlx::query("UPDATE wallets SET balance = balance + $1 WHERE id = $2")
            .bind(transfer.amount)
            .bind(&transfer.to)
            .execute(&mut *tx)
            .await
            .map_err(WalletError::storage("PgWalletStore::transfer_funds: credit receiver"))?;

        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (from_wallet_id, to_wallet_id, amount)
            VALUES ($1, $2, $3)
            RETURNING executed_at, from_wallet_id, to_wallet_id, amount
            "#,
        )
        .bind(&transfer.from)
        .bind(&transfer.to)
        .bind(transfer.amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(WalletError::storage("PgWalletStore::transfer_funds: record transaction"))?;

        tx.commit()
            .await
            .map_err(WalletError::storage("PgWalletStore::transfer_funds: commit"))?;

        Ok(transaction)
    }

    async fn ping(&self) -> Result<(), WalletError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(WalletError::storage("PgWalletStore::ping"))?;

        Ok(())
    }
}
