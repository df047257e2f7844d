//! Public API trait for the token authorizer.
//!
//! The gateway layer consumes this trait to obtain a policy decision for
//! every inbound request.

use async_trait::async_trait;

use crate::error::TokenAuthorizerError;
use crate::models::{AuthorizerEvent, AuthorizerResponse};

/// Public API trait for the token authorizer.
///
/// ```ignore
/// let resp = authorizer.authorize(&event).await?;
/// let effect = resp.effect();
/// ```
///
/// # Security
///
/// Rejections are opaque: the caller learns only that the request is
/// unauthorized, never which validation step failed.
#[async_trait]
pub trait TokenAuthorizerClient: Send + Sync {
    /// Evaluate the credential carried by `event`.
    ///
    /// An explicit deny is a successful call whose policy statement has
    /// [`Effect::Deny`](crate::Effect::Deny).
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the credential is missing, malformed, or invalid
    /// - `Internal` for unexpected errors
    async fn authorize(
        &self,
        event: &AuthorizerEvent,
    ) -> Result<AuthorizerResponse, TokenAuthorizerError>;
}
