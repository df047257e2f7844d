use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use token_authorizer_sdk::{AuthorizerEvent, AuthorizerResponse};
use tracing::field::Empty;

use super::error::ApiError;
use super::routes::RestState;

/// Evaluate a custom-authorizer event.
///
/// # Errors
///
/// [`ApiError`] wrapping `Unauthorized` for every rejected credential.
#[tracing::instrument(
    skip(state, event),
    fields(
        method_arn = %event.method_arn(),
        effect = Empty
    )
)]
pub async fn authorize(
    State(state): State<RestState>,
    Json(event): Json<AuthorizerEvent>,
) -> Result<Json<AuthorizerResponse>, ApiError> {
    let resp = state.client.authorize(&event).await?;

    if let Some(effect) = resp.effect() {
        tracing::Span::current().record("effect", tracing::field::display(effect));
    }
    Ok(Json(resp))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
