#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use securedash::router::init_router;
use securedash::state::AppState;
use securedash_config::JwtConfig;
use securedash_db::MemoryAccountStore;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub const SUPERADMIN_EMAIL: &str = "a@x.com";
pub const SUPERADMIN_PASSWORD: &str = "secret1";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryAccountStore>,
    pub jwt_config: JwtConfig,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryAccountStore::new());
        let jwt_config = JwtConfig::new(TEST_SECRET);
        let state = AppState::new(store.clone(), jwt_config.clone());

        Self {
            router: init_router(state),
            store,
            jwt_config,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

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

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/users/login",
                None,
                json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["token"].as_str().unwrap().to_string()
    }

    /// Bootstraps the superadmin and returns its token.
    pub async fn superadmin_token(&self) -> String {
        let (status, body) = self
            .post(
                "/api/users/createsuperadmin",
                None,
                json!({
                    "name": "A",
                    "email": SUPERADMIN_EMAIL,
                    "password": SUPERADMIN_PASSWORD
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "bootstrap failed: {}", body);
        self.login(SUPERADMIN_EMAIL, SUPERADMIN_PASSWORD).await
    }

    /// Registers an account through the API and returns its id.
    pub async fn register(
        &self,
        admin_token: &str,
        email: &str,
        password: &str,
        role: &str,
        modules: &[&str],
    ) -> String {
        let (status, body) = self
            .post(
                "/api/users/register",
                Some(admin_token),
                json!({
                    "name": "Test User",
                    "email": email,
                    "password": password,
                    "role": role,
                    "modules": modules
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {}", body);
        body["user"]["id"].as_str().unwrap().to_string()
    }
}
