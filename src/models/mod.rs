//! Data models representing database entities and request bodies.

/// Scale and range shared by balances and amounts
pub mod money;
/// Transfer ledger entries and the send-funds request
pub mod transaction;
/// Wallet balances
pub mod wallet;
