//! HTTP routing.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{health, wallets},
    openapi::ApiDoc,
    state::AppState,
};

/// Build the application router.
///
/// - `GET /health`
/// - `POST /api/v1/wallet`
/// - `GET /api/v1/wallet/{id}`
/// - `GET /api/v1/wallet/{id}/history`
/// - `POST /api/v1/wallet/{id}/send`
/// - `GET /swagger-ui`, backed by `GET /api-docs/openapi.json`
pub fn create_router(state: AppState) -> Router {
    let wallet_routes = Router::new()
        .route("/wallet", post(wallets::create_wallet))
        .route("/wallet/{id}", get(wallets::get_wallet))
        .route("/wallet/{id}/history", get(wallets::get_wallet_history))
        .route("/wallet/{id}/send", post(wallets::send_funds));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", wallet_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
