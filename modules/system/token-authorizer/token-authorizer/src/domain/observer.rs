//! Hooks notified with every decoded credential.

/// Receives the decoded `(type, token)` pair before validation.
///
/// Observers cannot influence the decision.
pub trait CredentialObserver: Send + Sync {
    fn on_credential(&self, token_type: &str, token: &str);
}

/// Emits a DEBUG event per credential. The token is redacted unless
/// `reveal_token` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    reveal_token: bool,
}

impl TracingObserver {
    #[must_use]
    pub fn new(reveal_token: bool) -> Self {
        Self { reveal_token }
    }
}

impl CredentialObserver for TracingObserver {
    fn on_credential(&self, token_type: &str, token: &str) {
        if self.reveal_token {
            tracing::debug!(token_type, token, "decoded credential");
        } else {
            tracing::debug!(token_type, token_len = token.len(), "decoded credential");
        }
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CredentialObserver for NoopObserver {
    fn on_credential(&self, _token_type: &str, _token: &str) {}
}
