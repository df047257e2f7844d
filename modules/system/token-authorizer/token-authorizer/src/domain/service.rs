//! Authorization decision engine.

use std::collections::HashMap;
use std::sync::Arc;

use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use token_authorizer_sdk::{AUTHORIZATION_HEADER, AuthorizerResponse, Effect, find_header};

use super::credential::{Credential, TokenCommand};
use super::error::DomainError;
use super::observer::{CredentialObserver, TracingObserver};
use super::secret::SharedSecret;
use crate::config::TokenAuthorizerConfig;

/// Outcome of a successful evaluation. Rejections are [`DomainError`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Allow(AuthorizerResponse),
    Deny(AuthorizerResponse),
}

impl Decision {
    #[must_use]
    pub fn effect(&self) -> Effect {
        match self {
            Self::Allow(_) => Effect::Allow,
            Self::Deny(_) => Effect::Deny,
        }
    }

    #[must_use]
    pub fn response(&self) -> &AuthorizerResponse {
        match self {
            Self::Allow(r) | Self::Deny(r) => r,
        }
    }

    #[must_use]
    pub fn into_response(self) -> AuthorizerResponse {
        match self {
            Self::Allow(r) | Self::Deny(r) => r,
        }
    }
}

/// Stateless authorizer. Every call is independent; the only state is
/// immutable configuration, so one instance may be shared across tasks.
pub struct Service {
    secret: SharedSecret,
    principal_id: String,
    context: Map<String, Value>,
    observer: Arc<dyn CredentialObserver>,
}

impl Service {
    /// Create a service from module configuration with a [`TracingObserver`].
    #[must_use]
    pub fn from_config(cfg: &TokenAuthorizerConfig) -> Self {
        Self {
            secret: SharedSecret::new(cfg.access_token.as_ref()),
            principal_id: cfg.principal_id.clone(),
            context: cfg.context.clone(),
            observer: Arc::new(TracingObserver::new(cfg.reveal_tokens_in_logs)),
        }
    }

    /// Replace the credential observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CredentialObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn has_secret(&self) -> bool {
        self.secret.is_set()
    }

    /// A secret is configured but it is the empty string.
    #[must_use]
    pub fn has_empty_secret(&self) -> bool {
        self.secret.is_empty()
    }

    /// Evaluate the `Authorization` header among `headers` for `resource`.
    ///
    /// # Errors
    ///
    /// Any [`DomainError`] means the request is rejected as unauthenticated.
    pub fn authorize<S: std::hash::BuildHasher>(
        &self,
        headers: &HashMap<String, String, S>,
        resource: &str,
    ) -> Result<Decision, DomainError> {
        self.authorize_credential(find_header(headers, AUTHORIZATION_HEADER), resource)
    }

    /// Evaluate a raw header value for `resource`.
    ///
    /// # Errors
    ///
    /// Any [`DomainError`] means the request is rejected as unauthenticated.
    pub fn authorize_credential(
        &self,
        header: Option<&str>,
        resource: &str,
    ) -> Result<Decision, DomainError> {
        let header =
            header.ok_or_else(|| DomainError::malformed_header("missing Authorization header"))?;
        let credential = Credential::parse(header)?;

        self.observer
            .on_credential(credential.token_type(), credential.token().expose_secret());

        credential.validated_type()?;

        match credential.command() {
            TokenCommand::Allow => Ok(Decision::Allow(self.policy(Effect::Allow, resource))),
            TokenCommand::Deny => Ok(Decision::Deny(self.policy(Effect::Deny, resource))),
            TokenCommand::Unauthorized => Err(DomainError::ExplicitUnauthorized),
            TokenCommand::Secret => {
                if self.secret.matches(credential.token().expose_secret()) {
                    Ok(Decision::Allow(self.policy(Effect::Allow, resource)))
                } else {
                    Err(DomainError::InvalidSecret)
                }
            }
        }
    }

    fn policy(&self, effect: Effect, resource: &str) -> AuthorizerResponse {
        AuthorizerResponse::new(
            self.principal_id.as_str(),
            effect,
            resource,
            self.context.clone(),
        )
    }
}
