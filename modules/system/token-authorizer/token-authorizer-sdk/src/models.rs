//! Wire models for the gateway custom-authorizer protocol.
//!
//! Field names follow the gateway's JSON casing: camelCase on the event and
//! the response envelope, `PascalCase` inside the policy document.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Policy language version stamped on every policy document.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The single action a decision grants or denies.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Header carrying the credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Inbound authorizer event, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthorizerEvent {
    /// The gateway extracted the identity source and passes it verbatim.
    #[serde(rename = "TOKEN")]
    Token(TokenEvent),
    /// The gateway forwards the request description including headers.
    #[serde(rename = "REQUEST")]
    Request(RequestEvent),
}

impl AuthorizerEvent {
    /// Identifier of the resource being protected.
    #[must_use]
    pub fn method_arn(&self) -> &str {
        match self {
            Self::Token(ev) => &ev.method_arn,
            Self::Request(ev) => &ev.method_arn,
        }
    }

    /// Raw credential, if the event carries one.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        match self {
            Self::Token(ev) => Some(&ev.authorization_token),
            Self::Request(ev) => ev.authorization(),
        }
    }
}

/// `TOKEN` authorizer event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEvent {
    pub authorization_token: String,
    pub method_arn: String,
}

/// `REQUEST` authorizer event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEvent {
    pub method_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// The gateway sends `null` when the request has no headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl RequestEvent {
    /// Value of the `Authorization` header, if present.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| find_header(h, AUTHORIZATION_HEADER))
    }
}

/// Look up a header by name.
///
/// An exact key match wins; otherwise the first ASCII case-insensitive match
/// is returned, which covers gateways that lower-case header names.
#[must_use]
pub fn find_header<'a, S: std::hash::BuildHasher>(
    headers: &'a HashMap<String, String, S>,
    name: &str,
) -> Option<&'a str> {
    headers.get(name).map(String::as_str).or_else(|| {
        headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    })
}

/// Policy statement effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => f.write_str("Allow"),
            Self::Deny => f.write_str("Deny"),
        }
    }
}

/// A single policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: Vec<String>,
    pub effect: Effect,
    pub resource: Vec<String>,
}

/// Policy document attached to a decision. The default is the empty
/// document sent when there is no resource to bind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// Policy binding [`INVOKE_ACTION`] on `resource` with `effect`.
    #[must_use]
    pub fn invoke(effect: Effect, resource: &str) -> Self {
        Self {
            version: POLICY_VERSION.to_owned(),
            statement: vec![PolicyStatement {
                action: vec![INVOKE_ACTION.to_owned()],
                effect,
                resource: vec![resource.to_owned()],
            }],
        }
    }
}

/// Outbound authorizer decision.
///
/// `context` is passthrough metadata forwarded by the gateway to the
/// integration; it plays no part in the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub context: serde_json::Map<String, serde_json::Value>,
}

impl AuthorizerResponse {
    /// Build a decision for `resource`. An empty `resource` yields an empty
    /// policy document, so [`Self::effect`] is `None`.
    #[must_use]
    pub fn new(
        principal_id: impl Into<String>,
        effect: Effect,
        resource: &str,
        context: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            principal_id: principal_id.into(),
            policy_document: if resource.is_empty() {
                PolicyDocument::default()
            } else {
                PolicyDocument::invoke(effect, resource)
            },
            context,
        }
    }

    /// Effect of the first statement.
    #[must_use]
    pub fn effect(&self) -> Option<Effect> {
        self.policy_document.statement.first().map(|s| s.effect)
    }

    /// Resources of the first statement.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        self.policy_document
            .statement
            .first()
            .map_or(&[], |s| s.resource.as_slice())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_event_deserializes_from_gateway_json() {
        let event: AuthorizerEvent = serde_json::from_value(json!({
            "type": "TOKEN",
            "authorizationToken": "Basic OmFsbG93",
            "methodArn": "arn:aws:execute-api:us-east-1:123456789012:abc/prod/GET/hello"
        }))
        .unwrap();

        assert_eq!(event.authorization(), Some("Basic OmFsbG93"));
        assert_eq!(
            event.method_arn(),
            "arn:aws:execute-api:us-east-1:123456789012:abc/prod/GET/hello"
        );
    }

    #[test]
    fn request_event_tolerates_null_headers() {
        let event: AuthorizerEvent = serde_json::from_value(json!({
            "type": "REQUEST",
            "methodArn": "arn:test",
            "headers": null
        }))
        .unwrap();

        assert_eq!(event.authorization(), None);
    }

    #[test]
    fn request_event_header_lookup_is_case_insensitive() {
        let event: AuthorizerEvent = serde_json::from_value(json!({
            "type": "REQUEST",
            "methodArn": "arn:test",
            "httpMethod": "GET",
            "headers": { "authorization": "Basic abc", "host": "example.com" }
        }))
        .unwrap();

        assert_eq!(event.authorization(), Some("Basic abc"));
    }

    #[test]
    fn exact_header_key_wins_over_case_insensitive_match() {
        let mut headers = HashMap::new();
        headers.insert("AUTHORIZATION".to_owned(), "other".to_owned());
        headers.insert("Authorization".to_owned(), "exact".to_owned());

        assert_eq!(find_header(&headers, AUTHORIZATION_HEADER), Some("exact"));
    }

    #[test]
    fn response_serializes_with_gateway_casing() {
        let mut context = serde_json::Map::new();
        context.insert("numberKey".to_owned(), json!(123));
        let resp = AuthorizerResponse::new("user", Effect::Deny, "arn:test", context);

        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "principalId": "user",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": ["execute-api:Invoke"],
                        "Effect": "Deny",
                        "Resource": ["arn:test"]
                    }]
                },
                "context": { "numberKey": 123 }
            })
        );
    }

    #[test]
    fn empty_context_is_omitted() {
        let resp = AuthorizerResponse::new("user", Effect::Allow, "arn:test", serde_json::Map::new());
        let value = serde_json::to_value(&resp).unwrap();

        assert!(value.get("context").is_none());
        assert_eq!(resp.effect(), Some(Effect::Allow));
        assert_eq!(resp.resources(), &["arn:test".to_owned()]);
    }

    #[test]
    fn empty_resource_yields_empty_policy() {
        let resp = AuthorizerResponse::new("user", Effect::Allow, "", serde_json::Map::new());
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["policyDocument"], json!({ "Version": "", "Statement": [] }));
        assert_eq!(resp.effect(), None);
        assert!(resp.resources().is_empty());
    }
}
