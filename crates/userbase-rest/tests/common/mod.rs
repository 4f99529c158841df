//! Shared helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tower::ServiceExt;
use userbase_config::ServerConfig;
use userbase_core::{HealthCheck, NewUser, User, UserId, UserbaseError, UserbaseResult};
use userbase_repository::UserRepository;
use userbase_rest::{create_router, AppState};
use userbase_service::UserServiceImpl;

/// Repository kept in memory. Soft-deleted rows stay in the vector.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    failing: AtomicBool,
}

impl InMemoryUserRepository {
    /// Makes every subsequent call fail like a lost connection.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> UserbaseResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(UserbaseError::database("connection refused"));
        }
        Ok(())
    }

    /// Returns every row, deleted or not.
    pub fn all_rows(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserbaseResult<Vec<User>> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().filter(|u| !u.is_deleted()).cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> UserbaseResult<Option<User>> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id && !u.is_deleted())
            .cloned())
    }

    async fn find_by_name_containing(&self, keyword: &str) -> UserbaseResult<Vec<User>> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| !u.is_deleted() && u.name_contains(keyword))
            .cloned()
            .collect())
    }

    async fn insert(&self, user: NewUser) -> UserbaseResult<User> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let user = user.into_user(UserId::new(users.len() as i64 + 1));
        users.push(user.clone());
        Ok(user)
    }

    async fn soft_delete(&self, id: UserId) -> UserbaseResult<u64> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id && !u.is_deleted()) {
            Some(user) => {
                user.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// Health check whose outcome is fixed at construction.
pub struct StaticHealth(pub bool);

#[async_trait]
impl HealthCheck for StaticHealth {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn check(&self) -> UserbaseResult<()> {
        if self.0 {
            Ok(())
        } else {
            Err(UserbaseError::database("pool closed"))
        }
    }
}

/// Router wired to an in-memory repository.
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryUserRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_health(true)
    }

    pub fn with_health(healthy: bool) -> Self {
        let repository = Arc::new(InMemoryUserRepository::default());
        let service = Arc::new(UserServiceImpl::new(repository.clone()));
        let state = AppState::new(service, Arc::new(StaticHealth(healthy)));
        let router = create_router(state, &ServerConfig::default());
        Self { router, repository }
    }

    /// Sends one request and returns the status with the raw body.
    pub async fn send(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    /// Sends one request and decodes the body as JSON.
    pub async fn send_json(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send_json(Method::GET, uri, "").await
    }
}
