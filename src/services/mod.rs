//! Business logic services.
//!
//! Services sit between the handlers and the `WalletStore`. They validate
//! input and delegate persistence; they hold no mutable state of their own.

pub mod transfer_service;
pub mod wallet_service;
