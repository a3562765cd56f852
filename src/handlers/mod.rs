//! HTTP request handlers (route handlers).
//!
//! Handlers only translate between HTTP and the services; every rule lives
//! in `services` and `repository`.

/// Liveness and store connectivity
pub mod health;
/// Wallet endpoints
pub mod wallets;
