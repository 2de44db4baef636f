//! # incident-boardd — incident board daemon
//!
//! Composition root that wires the store and the HTTP adapter together and
//! starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`incident-board.toml` + environment overrides)
//! - Initialize `tracing` logging
//! - Construct the single in-memory incident store, seeded once
//! - Construct the application service, injecting the store via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! One process owns one store. Every request, on whichever runtime worker
//! thread it lands, sees the same sequence.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use incident_board_adapter_http_axum::state::AppState;
use incident_board_adapter_storage_memory::Config as StoreConfig;
use incident_board_app::services::incident_service::IncidentService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Store
    let store = StoreConfig {
        seed: config.store.seed,
    }
    .build();

    // Services
    let incident_service = IncidentService::new(store);
    tracing::info!(
        seed = %config.store.seed,
        incidents = incident_service.count_incidents().await?,
        "incident store ready"
    );

    // HTTP
    let app = incident_board_adapter_http_axum::router::build(AppState::new(incident_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "incident-boardd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("incident-boardd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
