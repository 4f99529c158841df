//! Database connection pool management.

use async_trait::async_trait;
use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use sqlx::ConnectOptions;
use std::sync::Arc;
use tracing::{info, warn};
use userbase_config::DatabaseConfig;
use userbase_core::{HealthCheck, UserbaseError, UserbaseResult};

/// Database pool wrapper.
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connects a new pool using the configuration.
    pub async fn connect(config: &DatabaseConfig) -> UserbaseResult<Self> {
        info!("Connecting to PostgreSQL at {}...", config.display_target());

        let options = connect_options(config)?;
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                UserbaseError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> UserbaseResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| UserbaseError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

#[async_trait]
impl HealthCheck for DatabasePool {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn check(&self) -> UserbaseResult<()> {
        self.health_check().await
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Builds connection options from the configuration.
///
/// A configured `url` wins over the discrete fields. The time zone is
/// applied as a session option in both cases so timestamps come back in a
/// fixed zone. With `log_queries` set, statements are logged at `info`.
pub fn connect_options(config: &DatabaseConfig) -> UserbaseResult<PgConnectOptions> {
    let options = match &config.url {
        Some(url) => url
            .parse::<PgConnectOptions>()
            .map_err(|e| UserbaseError::Configuration(format!("Invalid database URL: {}", e)))?,
        None => {
            let ssl_mode = config
                .ssl_mode
                .to_lowercase()
                .parse::<PgSslMode>()
                .map_err(|e| UserbaseError::Configuration(format!("Invalid ssl mode: {}", e)))?;

            PgConnectOptions::new()
                .host(&config.host)
                .port(config.port)
                .username(&config.user)
                .password(&config.password)
                .database(&config.name)
                .ssl_mode(ssl_mode)
        }
    };

    let options = options.options([("timezone", config.timezone.as_str())]);

    Ok(if config.log_queries {
        options.log_statements(LevelFilter::Info)
    } else {
        options.disable_statement_logging()
    })
}

/// Connects a pool and wraps it for sharing.
pub async fn create_pool(config: &DatabaseConfig) -> UserbaseResult<Arc<DatabasePool>> {
    let pool = DatabasePool::connect(config).await?;
    Ok(Arc::new(pool))
}
