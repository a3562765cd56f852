//! Shared state handed to every handler.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    repository::DynWalletStore,
    services::{transfer_service::TransferService, wallet_service::WalletService},
};

#[derive(Clone)]
pub struct AppState {
    pub wallets: Arc<WalletService>,
    pub transfers: Arc<TransferService>,
}

impl AppState {
    /// Wire both services to the same store.
    pub fn new(store: DynWalletStore, default_balance: Decimal) -> Self {
        Self {
            wallets: Arc::new(WalletService::new(store.clone(), default_balance)),
            transfers: Arc::new(TransferService::new(store)),
        }
    }
}
