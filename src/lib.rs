//! E-wallet service.
//!
//! A REST API for creating wallets with a fixed starting balance, moving
//! funds between them atomically, and reading balances and transfer history.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Money**: `rust_decimal::Decimal`, JSON numbers on the wire
//! - **Format**: JSON requests/responses
//! - **Docs**: OpenAPI via utoipa, Swagger UI at `/swagger-ui`
//!
//! Control flow: `handlers` -> `services` -> `repository::WalletStore` -> database.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod router;
pub mod services;
pub mod state;

pub use error::WalletError;
pub use router::create_router;
pub use state::AppState;
