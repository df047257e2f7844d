#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the authorizer REST endpoint
//!
//! These tests verify that:
//! 1. Allow and Deny decisions come back as 200 with the policy document
//! 2. Every rejection is a uniform 401 with an opaque body
//! 3. Both `TOKEN` and `REQUEST` events are accepted
//! 4. The health route answers without credentials

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use secrecy::SecretString;
use serde_json::{Value, json};
use token_authorizer::{TokenAuthorizerConfig, TokenAuthorizerModule};
use tower::ServiceExt;

const ARN: &str = "arn:aws:execute-api:us-east-1:123456789012:abcdef/prod/GET/hello";

fn router() -> Router {
    let cfg = TokenAuthorizerConfig {
        access_token: Some(SecretString::from("mysecret".to_owned())),
        ..TokenAuthorizerConfig::default()
    };
    TokenAuthorizerModule::init(&cfg).router()
}

fn basic(payload: &str) -> String {
    format!("Basic {}", STANDARD.encode(payload))
}

fn token_event(payload: &str) -> Value {
    json!({
        "type": "TOKEN",
        "authorizationToken": basic(payload),
        "methodArn": ARN,
    })
}

fn request_event(headers: &Value) -> Value {
    json!({
        "type": "REQUEST",
        "methodArn": ARN,
        "resource": "/{proxy+}",
        "path": "/hello",
        "httpMethod": "GET",
        "headers": headers,
    })
}

async fn post_event(router: Router, event: &Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/authorize")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(event).unwrap()))
                .unwrap(),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn allow_command_returns_allow_policy() {
    let (status, body) = post_event(router(), &token_event(":allow")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["principalId"], "user");
    assert_eq!(body["policyDocument"]["Version"], "2012-10-17");
    assert_eq!(
        body["policyDocument"]["Statement"][0],
        json!({
            "Action": ["execute-api:Invoke"],
            "Effect": "Allow",
            "Resource": [ARN],
        })
    );
    assert_eq!(
        body["context"],
        json!({ "stringKey": "stringval", "numberKey": 123, "booleanKey": true })
    );
}

#[tokio::test]
async fn matching_secret_returns_allow_policy() {
    let (status, body) = post_event(router(), &token_event("api.token:mysecret")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Allow");
}

#[tokio::test]
async fn deny_command_returns_deny_policy() {
    let (status, body) = post_event(router(), &token_event(":deny")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Deny");
    assert_eq!(body["policyDocument"]["Statement"][0]["Resource"], json!([ARN]));
}

#[tokio::test]
async fn rejections_are_uniform_401() {
    let cases = [
        token_event(":unauthorized"),
        token_event("api.token:wrongsecret"),
        token_event("bogus:allow"),
        token_event("no-colon"),
        json!({ "type": "TOKEN", "authorizationToken": "Basic", "methodArn": ARN }),
        json!({ "type": "TOKEN", "authorizationToken": "Basic %%%", "methodArn": ARN }),
        request_event(&json!({ "Host": "example.com" })),
        request_event(&Value::Null),
    ];

    for event in &cases {
        let (status, body) = post_event(router(), event).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{event}");
        assert_eq!(body, json!({ "message": "Unauthorized" }), "{event}");
    }
}

#[tokio::test]
async fn request_event_reads_authorization_header() {
    let headers = json!({ "authorization": basic("api.token:mysecret") });
    let (status, body) = post_event(router(), &request_event(&headers)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "Allow");
}

#[tokio::test]
async fn malformed_event_is_client_error() {
    let (status, _) = post_event(router(), &json!({ "type": "COOKIE", "methodArn": ARN })).await;
    assert!(status.is_client_error());
    assert_ne!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_is_public() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
}
