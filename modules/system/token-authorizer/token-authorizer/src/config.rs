//! Configuration for the token authorizer.

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Environment variable carrying the shared secret.
pub const ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";

/// Secret value meaning "no secret configured".
pub const UNSET_SECRET_SENTINEL: &str = "fail";

/// Module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenAuthorizerConfig {
    /// Shared secret accepted as a token. `None` or
    /// [`UNSET_SECRET_SENTINEL`] reject every secret-based credential.
    pub access_token: Option<SecretString>,

    /// Principal attached to every policy.
    pub principal_id: String,

    /// Passthrough claims attached to every policy.
    pub context: Map<String, Value>,

    /// Log decoded tokens in clear text. Development only.
    pub reveal_tokens_in_logs: bool,
}

impl Default for TokenAuthorizerConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            principal_id: "user".to_owned(),
            context: default_context(),
            reveal_tokens_in_logs: false,
        }
    }
}

fn default_context() -> Map<String, Value> {
    let mut context = Map::new();
    context.insert("stringKey".to_owned(), json!("stringval"));
    context.insert("numberKey".to_owned(), json!(123));
    context.insert("booleanKey".to_owned(), json!(true));
    context
}
