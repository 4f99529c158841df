//! Server startup utilities.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use userbase_config::{AppConfig, ObservabilityConfig};

/// Builds the default filter directive for a configured level.
///
/// The application crates follow the configured level; HTTP tracing and
/// statement logging are kept at `info` unless `RUST_LOG` says otherwise.
#[must_use]
pub fn default_filter(level: &str) -> String {
    format!("{level},userbase={level},tower_http=info,sqlx=info")
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialised: {}", e);
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   __  __                   __
  / / / /_______  _________/ /_  ____ _________
 / / / / ___/ _ \/ ___/ __  / __ \/ __ `/ ___/ _ \
/ /_/ (__  )  __/ /  / /_/ / /_/ / /_/ (__  )  __/
\____/____/\___/_/   \____/_.___/\__,_/____/\___/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("REST API:    http://{}/users", addr);
    info!("Health:      http://{}/health", addr);
    info!("API Docs:    http://{}/api-docs/openapi.json", addr);
    info!("Database:    {}", config.database.display_target());
    info!("{}", separator);
}
