//! Domain errors for the token authorizer.

use token_authorizer_sdk::TokenAuthorizerError;

/// Reasons a credential is rejected.
///
/// The variants exist for logging and tests only. Across the boundary every
/// variant becomes [`TokenAuthorizerError::Unauthorized`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed authorization header: {0}")]
    MalformedHeader(String),

    #[error("malformed credential payload: {0}")]
    MalformedPayload(String),

    #[error("unknown token type '{0}'")]
    UnknownTokenType(String),

    #[error("unauthorized")]
    ExplicitUnauthorized,

    #[error("invalid token")]
    InvalidSecret,
}

impl DomainError {
    pub fn malformed_header(reason: impl Into<String>) -> Self {
        Self::MalformedHeader(reason.into())
    }

    pub fn malformed_payload(reason: impl Into<String>) -> Self {
        Self::MalformedPayload(reason.into())
    }

    /// Stable identifier used as a log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedHeader(_) => "malformed_header",
            Self::MalformedPayload(_) => "malformed_payload",
            Self::UnknownTokenType(_) => "unknown_token_type",
            Self::ExplicitUnauthorized => "explicit_unauthorized",
            Self::InvalidSecret => "invalid_secret",
        }
    }
}

impl From<DomainError> for TokenAuthorizerError {
    fn from(_: DomainError) -> Self {
        Self::Unauthorized
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn every_kind_collapses_to_unauthorized() {
        let errors = [
            DomainError::malformed_header("no space"),
            DomainError::malformed_payload("no colon"),
            DomainError::UnknownTokenType("bogus".to_owned()),
            DomainError::ExplicitUnauthorized,
            DomainError::InvalidSecret,
        ];

        for err in errors {
            let external: TokenAuthorizerError = err.into();
            assert_eq!(external, TokenAuthorizerError::Unauthorized);
            assert_eq!(external.to_string(), "Unauthorized");
        }
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            DomainError::malformed_header("").kind(),
            DomainError::malformed_payload("").kind(),
            DomainError::UnknownTokenType(String::new()).kind(),
            DomainError::ExplicitUnauthorized.kind(),
            DomainError::InvalidSecret.kind(),
        ];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }
}
