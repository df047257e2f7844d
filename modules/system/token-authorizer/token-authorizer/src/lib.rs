#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Token Authorizer
//!
//! Decides whether a request presenting an `Authorization` header may invoke
//! a protected resource.
//!
//! ## Credential format
//!
//! ```text
//! Authorization: <scheme> base64(<type>:<token>)
//! ```
//!
//! - `<type>` is empty or `api.token` (case-insensitive).
//! - `<token>` is `allow`, `deny`, `unauthorized` (case-insensitive) or the
//!   configured shared secret (case-sensitive).
//!
//! ## Configuration
//!
//! ```yaml
//! authorizer:
//!   access_token: "s3cret"     # or ACCESS_TOKEN; "fail" means unset
//!   principal_id: "user"
//!   context:
//!     stringKey: "stringval"
//!     numberKey: 123
//!     booleanKey: true
//!   reveal_tokens_in_logs: false
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod module;

pub use config::TokenAuthorizerConfig;
pub use domain::{Decision, DomainError, Service};
pub use module::TokenAuthorizerModule;
