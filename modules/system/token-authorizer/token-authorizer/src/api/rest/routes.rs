use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use token_authorizer_sdk::TokenAuthorizerClient;
use tower_http::trace::TraceLayer;

use super::handlers;

/// Shared state for the REST handlers.
#[derive(Clone)]
pub struct RestState {
    pub client: Arc<dyn TokenAuthorizerClient>,
}

/// Build the authorizer router.
///
/// - `POST /authorize` - evaluate an authorizer event
/// - `GET /health` - liveness
pub fn router(client: Arc<dyn TokenAuthorizerClient>) -> Router {
    Router::new()
        .route("/authorize", post(handlers::authorize))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(RestState { client })
}
