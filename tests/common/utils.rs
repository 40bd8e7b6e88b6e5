use std::sync::Arc;

use api::{create_app, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared::{
    AccessClaims, JwtTokenSigner, StaticCredentialProvider, TokenService, TokenSigner,
};
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "APItestkey";
pub const TEST_API_SECRET: &str = "test-secret-that-is-long-enough";

pub fn app_with(credentials: StaticCredentialProvider, signer: Arc<dyn TokenSigner>) -> Router {
    let token_service = TokenService::new(Arc::new(credentials), signer);
    create_app(AppState::new(Arc::new(token_service)))
}

pub fn configured_app() -> Router {
    app_with(
        StaticCredentialProvider::new(TEST_API_KEY, TEST_API_SECRET),
        Arc::new(JwtTokenSigner),
    )
}

/// Sends a GET through the router and returns the status and JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    get_json_with_headers(app, uri, &[]).await
}

pub async fn get_json_with_headers(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// Verifies the `token` field of a token response with the test secret.
pub fn decode_token(body: &Value) -> AccessClaims {
    let token = body["token"].as_str().expect("response has no token");
    JwtTokenSigner.verify(token, TEST_API_SECRET).unwrap()
}
