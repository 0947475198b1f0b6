//! Orders API Binary
//!
//! Starts the orders REST service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin orders-api
//! ```
//!
//! # Environment Variables
//!
//! All optional:
//! - `ORDERS_APP_NAME`: Application name (default: Orders API)
//! - `ORDERS_BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `ORDERS_HTTP_PORT`: HTTP server port (default: 8000)
//! - `ORDERS_API_PREFIX`: URL prefix for order routes (default: /api/v1)
//! - `ORDERS_SEED_SAMPLE_DATA`: Seed demonstration orders at startup (default: true)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use orders_api::config::Settings;
use orders_api::infrastructure::http::{AppState, create_router};
use orders_api::infrastructure::persistence::{InMemoryOrderStore, seed_sample_orders};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Orders API");

    let settings = Settings::from_env()?;
    log_config(&settings);

    let store = Arc::new(InMemoryOrderStore::new());
    if settings.seed_sample_data {
        seed_sample_orders(store.as_ref()).await?;
        tracing::info!(orders = store.len(), "Sample data seeded");
    }

    let state = AppState {
        store,
        app_name: settings.app_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state, &settings.api_prefix);

    let addr: SocketAddr = format!("{}:{}", settings.bind_address, settings.http_port).parse()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /status");
    tracing::info!("  GET    {}/orders", settings.api_prefix);
    tracing::info!("  POST   {}/orders", settings.api_prefix);
    tracing::info!("  GET    {}/orders/{{id}}", settings.api_prefix);
    tracing::info!("  PUT    {}/orders/{{id}}/status", settings.api_prefix);
    tracing::info!("  DELETE {}/orders/{{id}}", settings.api_prefix);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Orders API stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "orders_api=info"
                    .parse()
                    .expect("static directive 'orders_api=info' is valid"),
            ),
        )
        .init();
}

/// Log the parsed configuration.
fn log_config(settings: &Settings) {
    tracing::info!(
        app_name = %settings.app_name,
        bind_address = %settings.bind_address,
        http_port = settings.http_port,
        api_prefix = %settings.api_prefix,
        seed_sample_data = settings.seed_sample_data,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. Failure to install handlers
/// means the process cannot respond to termination signals, so it is better
/// to fail fast during startup than to have an unresponsive process.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
