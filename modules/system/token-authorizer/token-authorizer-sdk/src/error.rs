//! Error types for the token authorizer.

use thiserror::Error;

/// Errors surfaced across the authorizer boundary.
///
/// Every credential failure collapses into `Unauthorized`; the variant
/// carries no detail so the reason never leaks to the caller.
/// An explicit deny is not an error, see [`crate::Effect::Deny`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenAuthorizerError {
    /// The credential was rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
