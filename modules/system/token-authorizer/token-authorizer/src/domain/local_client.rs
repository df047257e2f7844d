//! Local (in-process) client for the token authorizer.

use std::sync::Arc;

use async_trait::async_trait;
use token_authorizer_sdk::{
    AuthorizerEvent, AuthorizerResponse, TokenAuthorizerClient, TokenAuthorizerError,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct TokenAuthorizerLocalClient {
    svc: Arc<Service>,
}

impl TokenAuthorizerLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(method_arn: &str, e: DomainError) -> TokenAuthorizerError {
    tracing::debug!(kind = e.kind(), error = %e, method_arn, "credential rejected");
    e.into()
}

#[async_trait]
impl TokenAuthorizerClient for TokenAuthorizerLocalClient {
    async fn authorize(
        &self,
        event: &AuthorizerEvent,
    ) -> Result<AuthorizerResponse, TokenAuthorizerError> {
        let method_arn = event.method_arn();
        let decision = self
            .svc
            .authorize_credential(event.authorization(), method_arn)
            .map_err(|e| log_and_convert(method_arn, e))?;

        tracing::debug!(effect = %decision.effect(), method_arn, "credential accepted");
        Ok(decision.into_response())
    }
}
