//! Transfer service - validation gate in front of the atomic store transfer.
//!
//! This service handles:
//! - Rejecting non-positive amounts and amounts finer than one cent
//! - Rejecting transfers from a wallet to itself
//! - Delegating the debit/credit/record unit to the store
//!
//! Validation happens before any storage call, so a rejected request never
//! touches the database.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{
    error::WalletError,
    models::{
        money,
        transaction::{NewTransaction, Transaction},
    },
    repository::DynWalletStore,
};

pub struct TransferService {
    store: DynWalletStore,
}

impl TransferService {
    pub fn new(store: DynWalletStore) -> Self {
        Self { store }
    }

    /// Move `amount` from wallet `from` to wallet `to`.
    ///
    /// # Returns
    ///
    /// The recorded transaction, with the timestamp assigned by the store
    ///
    /// # Errors
    ///
    /// - `InvalidAmount`: amount is zero, negative, has more than two
    ///   decimal places, or exceeds the largest storable balance
    /// - `SenderIsReceiver`: `from` and `to` are the same wallet
    /// - `WalletNotFound`: sender does not exist (passed through from the store)
    /// - `ReceiverNotFound`, `InsufficientFunds`, `Storage`: from the store
    pub async fn send_funds(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<Transaction, WalletError> {
        if let Err(e) = money::check_amount(amount) {
            warn!(from, to, %amount, "Transfer rejected: amount out of range");
            return Err(e);
        }

        if from == to {
            warn!(from, "Transfer rejected: sender is receiver");
            return Err(WalletError::SenderIsReceiver);
        }

        let transaction = self
            .store
            .transfer_funds(NewTransaction {
                from: from.to_string(),
                to: to.to_string(),
                amount,
            })
            .await?;

        info!(from, to, %amount, "Funds transferred");

        Ok(transaction)
    }
}
