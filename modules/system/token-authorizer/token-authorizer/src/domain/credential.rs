//! Parsing of the `Authorization` header.
//!
//! The wire format is `"<scheme> base64(<type>:<token>)"`. The scheme is
//! not checked; only the two-part shape is.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};

use super::error::DomainError;

/// Recognized token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Empty type field.
    Default,
    /// `api.token`.
    ApiToken,
}

impl TokenType {
    /// Case-insensitive parse. `None` for anything unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "" => Some(Self::Default),
            "api.token" => Some(Self::ApiToken),
            _ => None,
        }
    }
}

/// What the token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCommand {
    Allow,
    Deny,
    Unauthorized,
    /// Not a command; compare against the shared secret.
    Secret,
}

impl TokenCommand {
    #[must_use]
    pub fn classify(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "allow" => Self::Allow,
            "deny" => Self::Deny,
            "unauthorized" => Self::Unauthorized,
            _ => Self::Secret,
        }
    }
}

/// Decoded credential. The type is kept raw so it can be observed before
/// validation.
#[derive(Debug)]
pub struct Credential {
    token_type: String,
    token: SecretString,
}

impl Credential {
    /// Parse a raw `Authorization` header value.
    ///
    /// # Errors
    ///
    /// - `MalformedHeader` unless the value is exactly two space-separated
    ///   parts with a valid base64 payload
    /// - `MalformedPayload` if the decoded payload is not UTF-8 or has no `:`
    pub fn parse(header: &str) -> Result<Self, DomainError> {
        let Some((_scheme, payload)) = header.split_once(' ') else {
            return Err(DomainError::malformed_header(
                "expected `<scheme> <payload>`",
            ));
        };
        if payload.contains(' ') {
            return Err(DomainError::malformed_header(
                "expected exactly two space-separated parts",
            ));
        }

        let raw = STANDARD
            .decode(payload)
            .map_err(|e| DomainError::malformed_header(format!("payload is not base64: {e}")))?;
        let decoded = String::from_utf8(raw)
            .map_err(|_| DomainError::malformed_payload("payload is not valid UTF-8"))?;

        let Some((token_type, token)) = decoded.split_once(':') else {
            return Err(DomainError::malformed_payload("expected `<type>:<token>`"));
        };

        Ok(Self {
            token_type: token_type.to_owned(),
            token: SecretString::from(token.to_owned()),
        })
    }

    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    #[must_use]
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Validated token type.
    ///
    /// # Errors
    ///
    /// `UnknownTokenType` if the raw type is not recognized.
    pub fn validated_type(&self) -> Result<TokenType, DomainError> {
        TokenType::parse(&self.token_type)
            .ok_or_else(|| DomainError::UnknownTokenType(self.token_type.clone()))
    }

    #[must_use]
    pub fn command(&self) -> TokenCommand {
        TokenCommand::classify(self.token.expose_secret())
    }
}
