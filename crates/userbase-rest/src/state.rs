//! Application state for Axum handlers.

use std::sync::Arc;
use userbase_core::HealthCheck;
use userbase_service::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    /// Dependency checked by the readiness endpoint.
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, health: Arc<dyn HealthCheck>) -> Self {
        Self {
            user_service,
            health,
        }
    }
}
