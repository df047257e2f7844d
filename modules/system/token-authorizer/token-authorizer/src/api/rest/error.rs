use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use token_authorizer_sdk::TokenAuthorizerError;

/// Body the gateway expects alongside a 401 from a custom authorizer.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Wraps [`TokenAuthorizerError`] so `?` works in handlers.
#[derive(Debug)]
pub struct ApiError(pub TokenAuthorizerError);

impl From<TokenAuthorizerError> for ApiError {
    fn from(e: TokenAuthorizerError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TokenAuthorizerError::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE),
            TokenAuthorizerError::Internal(msg) => {
                tracing::error!("authorizer internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
