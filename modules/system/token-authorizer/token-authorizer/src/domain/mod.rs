pub mod credential;
pub mod error;
pub mod local_client;
pub mod observer;
pub mod secret;
pub mod service;

pub use credential::{Credential, TokenCommand, TokenType};
pub use error::DomainError;
pub use local_client::TokenAuthorizerLocalClient;
pub use observer::{CredentialObserver, NoopObserver, TracingObserver};
pub use secret::SharedSecret;
pub use service::{Decision, Service};
