//! Shared helpers for HTTP-level tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use collection_server::api::build_router;
use collection_server::db::DbService;
use collection_server::{Config, JwtVerifier, ServerState};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

/// Router over a fresh in-memory database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::for_tests(SECRET);
        let db = DbService::in_memory().await.unwrap();
        let verifier = Arc::new(JwtVerifier::new(config.jwt.clone()));
        let state = ServerState::with_parts(config, db.pool.clone(), verifier);
        Self {
            router: build_router(state),
            pool: db.pool,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(request("GET", uri, None, None)).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(request("POST", uri, Some(body), None)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(request("DELETE", uri, None, None)).await
    }

    /// Run raw SQL against the test database
    pub async fn exec(&self, sql: &str) {
        sqlx::query(sql).execute(&self.pool).await.unwrap();
    }
}

/// Build a request, optionally with a JSON body and a bearer token
pub fn request(method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sign a token accepted by the test verifier
pub fn token(permissions: &[&str]) -> String {
    sign(json!({
        "sub": "auth0|test-user",
        "permissions": permissions,
        "exp": chrono::Utc::now().timestamp() + 3600,
        "iss": "collection-auth",
        "aud": "drinks"
    }))
}

pub fn sign(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}
