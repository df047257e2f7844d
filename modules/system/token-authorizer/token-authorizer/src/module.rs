//! Token authorizer module.

use std::sync::Arc;

use axum::Router;
use token_authorizer_sdk::TokenAuthorizerClient;
use tracing::info;

use crate::api::rest;
use crate::config::{ACCESS_TOKEN_ENV, TokenAuthorizerConfig};
use crate::domain::{Service, TokenAuthorizerLocalClient};

/// Wires the decision engine, its client and the REST surface.
pub struct TokenAuthorizerModule {
    service: Arc<Service>,
    client: Arc<dyn TokenAuthorizerClient>,
}

impl TokenAuthorizerModule {
    #[must_use]
    pub fn init(cfg: &TokenAuthorizerConfig) -> Self {
        info!("Initializing token_authorizer");

        let service = Arc::new(Service::from_config(cfg));
        warn_on_unsafe_config(cfg, &service);
        info!(
            principal_id = %cfg.principal_id,
            context_keys = cfg.context.len(),
            secret_configured = service.has_secret(),
            "Loaded token authorizer configuration"
        );

        let client: Arc<dyn TokenAuthorizerClient> =
            Arc::new(TokenAuthorizerLocalClient::new(service.clone()));

        Self { service, client }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn TokenAuthorizerClient> {
        self.client.clone()
    }

    pub fn router(&self) -> Router {
        rest::router(self.client())
    }
}

fn warn_on_unsafe_config(cfg: &TokenAuthorizerConfig, service: &Service) {
    if service.has_empty_secret() {
        tracing::warn!(
            env = ACCESS_TOKEN_ENV,
            "Shared secret is empty; an empty token will be accepted"
        );
    }
    if !service.has_secret() {
        tracing::warn!(
            env = ACCESS_TOKEN_ENV,
            "No shared secret configured; secret-based credentials will be rejected"
        );
    }
    if cfg.reveal_tokens_in_logs {
        tracing::warn!("Decoded tokens will be logged in clear text. Do NOT use this in production.");
    }
}
