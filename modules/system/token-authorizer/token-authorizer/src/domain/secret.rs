//! The configured shared secret.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::config::UNSET_SECRET_SENTINEL;

/// Immutable shared secret. Unset secrets match nothing.
#[derive(Debug, Clone, Default)]
pub struct SharedSecret(Option<SecretString>);

impl SharedSecret {
    /// Normalize a configured value. `None` and [`UNSET_SECRET_SENTINEL`]
    /// mean unset. An empty string is a valid secret.
    #[must_use]
    pub fn new(configured: Option<&SecretString>) -> Self {
        let secret = configured.filter(|s| s.expose_secret() != UNSET_SECRET_SENTINEL);
        Self(secret.cloned())
    }

    /// Set, but to the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_ref().is_some_and(|s| s.expose_secret().is_empty())
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Exact, case-sensitive, constant-time comparison.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_ref().is_some_and(|s| {
            bool::from(s.expose_secret().as_bytes().ct_eq(candidate.as_bytes()))
        })
    }
}
