//! Shared application state for axum handlers.

use std::sync::Arc;

use incident_board_app::ports::IncidentRepository;
use incident_board_app::services::incident_service::IncidentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone`; only the `Arc` is cloned, and every handler sees the same store.
pub struct AppState<R> {
    /// Incident CRUD service.
    pub incident_service: Arc<IncidentService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            incident_service: Arc::clone(&self.incident_service),
        }
    }
}

impl<R> AppState<R>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(incident_service: IncidentService<R>) -> Self {
        Self {
            incident_service: Arc::new(incident_service),
        }
    }
}
