//! OpenAPI document served next to the Swagger UI.

use utoipa::OpenApi;

use crate::{
    handlers::{health, wallets},
    models::{
        transaction::{SendFundsRequest, Transaction},
        wallet::Wallet,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        wallets::create_wallet,
        wallets::get_wallet,
        wallets::get_wallet_history,
        wallets::send_funds,
    ),
    components(schemas(Wallet, Transaction, SendFundsRequest, health::HealthResponse)),
    tags(
        (name = "Wallet", description = "Wallet creation, balances and transfers"),
        (name = "Health", description = "Service liveness"),
    ),
    info(title = "E-wallet API")
)]
pub struct ApiDoc;
