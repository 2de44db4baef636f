//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod incidents;

use axum::Router;
use axum::routing::{get, put};

use incident_board_app::ports::IncidentRepository;

use crate::state::AppState;

/// Build the incident sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/incidents",
            get(incidents::list::<R>).post(incidents::create::<R>),
        )
        .route(
            "/incidents/{incident_id}",
            put(incidents::update::<R>).delete(incidents::delete::<R>),
        )
}
