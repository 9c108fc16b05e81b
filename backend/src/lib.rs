//! HTTP backend for the almanac: an art learning catalog and an Islamic
//! reference catalog served from one in-memory store.
//!
//! Configuration comes from `ALMANAC_*` environment variables (see
//! [`config`]); log verbosity from `RUST_LOG`.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{routing::get, Router};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use errors::StartupError;
use state::AppState;

/// Installs the global `fmt` subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors(state.config.cors_max_age);

    Router::new()
        .route("/", get(root_handler))
        .merge(api::router(&state.config.catalogs))
        .layer(middleware::catch_panic())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), StartupError> {
    let address = config.socket_addr();

    info!("Initializing state...");
    let state = AppState::new(config);
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn root_handler() -> &'static str {
    "Welcome to the Almanac API!"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
