//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use incident_board_app::ports::IncidentRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the incident routes at the root plus a `/health` probe.
/// Every response passes through a [`CorsLayer`] that accepts any origin
/// (mirrored, so credentials are allowed), method, and header, and a
/// [`TraceLayer`] that logs each request/response at `DEBUG`.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: IncidentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
