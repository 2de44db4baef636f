//! JSON handlers for incidents.
//!
//! Every outcome, including "not found" on update, is answered with `200 OK`;
//! callers distinguish failure by the presence of an `error` field.
//!
//! Bodies are read as JSON whatever their `Content-Type`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use incident_board_app::ports::IncidentRepository;
use incident_board_app::services::incident_service::UpdateOutcome;
use incident_board_domain::id::IncidentId;
use incident_board_domain::incident::IncidentRecord;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

pub const UPDATED_MESSAGE: &str = "Incident updated successfully";
pub const DELETED_MESSAGE: &str = "Incident deleted successfully";
pub const NOT_FOUND_MESSAGE: &str = "Incident not found";

/// Body of a successful update.
#[derive(Serialize)]
pub struct UpdatedBody {
    pub message: &'static str,
    pub updated: IncidentRecord,
}

/// Body of a delete, whether or not anything matched.
#[derive(Serialize)]
pub struct DeletedBody {
    pub message: &'static str,
    pub remaining: Vec<IncidentRecord>,
}

/// Possible responses from the list and create endpoints.
pub enum ListResponse {
    Ok(Json<Vec<IncidentRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Updated(Json<UpdatedBody>),
    NotFound,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated(json) => json.into_response(),
            Self::NotFound => Json(ErrorBody {
                error: NOT_FOUND_MESSAGE.to_string(),
            })
            .into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<DeletedBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// `GET /incidents`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let incidents = state.incident_service.list_incidents().await?;
    Ok(ListResponse::Ok(Json(incidents)))
}

/// `POST /incidents`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<ListResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let record: IncidentRecord = serde_json::from_slice(&body)?;
    let incidents = state.incident_service.report_incident(record).await?;
    Ok(ListResponse::Ok(Json(incidents)))
}

/// `PUT /incidents/{incident_id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(incident_id): Path<String>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let patch: IncidentRecord = serde_json::from_slice(&body)?;
    let id = IncidentId::from(incident_id);
    match state.incident_service.update_incident(&id, patch).await? {
        UpdateOutcome::Updated(updated) => Ok(UpdateResponse::Updated(Json(UpdatedBody {
            message: UPDATED_MESSAGE,
            updated,
        }))),
        UpdateOutcome::NotFound => Ok(UpdateResponse::NotFound),
    }
}

/// `DELETE /incidents/{incident_id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(incident_id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let id = IncidentId::from(incident_id);
    let deletion = state.incident_service.delete_incident(&id).await?;
    Ok(DeleteResponse::Deleted(Json(DeletedBody {
        message: DELETED_MESSAGE,
        remaining: deletion.remaining,
    })))
}
