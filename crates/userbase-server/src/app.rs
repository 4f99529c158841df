//! Application builder.

use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use userbase_config::AppConfig;
use userbase_core::{UserbaseError, UserbaseResult};
use userbase_repository::{create_pool, DatabasePool, PgUserRepository};
use userbase_rest::{create_router, AppState};
use userbase_service::UserServiceImpl;

/// Fully wired application, ready to serve.
pub struct App {
    config: AppConfig,
    pool: Arc<DatabasePool>,
    router: Router,
}

impl App {
    /// Returns the router.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the configured address and serves until `shutdown` resolves,
    /// then closes the pool.
    pub async fn serve<F>(self, shutdown: F) -> UserbaseResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| UserbaseError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        info!("Starting REST server on http://{}", addr);

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| UserbaseError::Internal(format!("REST server error: {}", e)));

        self.pool.close().await;
        result
    }
}

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
    pool: Option<Arc<DatabasePool>>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self {
            config: None,
            pool: None,
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses an existing pool instead of connecting one.
    pub fn with_pool(mut self, pool: Arc<DatabasePool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Connects the store (unless a pool was given) and wires every layer.
    pub async fn build(self) -> UserbaseResult<App> {
        let config = self.config.unwrap_or_default();

        let pool = match self.pool {
            Some(pool) => pool,
            None => create_pool(&config.database).await?,
        };

        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let user_service = Arc::new(UserServiceImpl::new(user_repository));
        let state = AppState::new(user_service, pool.clone());
        let router = create_router(state, &config.server);

        Ok(App {
            config,
            pool,
            router,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
