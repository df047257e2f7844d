#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Token Authorizer SDK
//!
//! This crate provides the public contract of the token authorizer:
//!
//! - [`TokenAuthorizerClient`] - Public API trait for consumers (the gateway layer)
//! - [`AuthorizerEvent`] - Inbound custom-authorizer event (`TOKEN` or `REQUEST`)
//! - [`AuthorizerResponse`] - Outbound policy decision
//! - [`TokenAuthorizerError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use token_authorizer_sdk::{AuthorizerEvent, Effect, TokenAuthorizerClient};
//!
//! let event: AuthorizerEvent = serde_json::from_slice(&body)?;
//! match authorizer.authorize(&event).await {
//!     Ok(resp) if resp.effect() == Some(Effect::Allow) => { /* forward */ }
//!     Ok(_) => { /* 403 */ }
//!     Err(_) => { /* 401 */ }
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::TokenAuthorizerClient;
pub use error::TokenAuthorizerError;
pub use models::{
    AUTHORIZATION_HEADER, AuthorizerEvent, AuthorizerResponse, Effect, INVOKE_ACTION,
    POLICY_VERSION, PolicyDocument, PolicyStatement, RequestEvent, TokenEvent, find_header,
};
