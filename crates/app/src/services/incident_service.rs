//! Incident service — use-cases for the incident board.

use incident_board_domain::error::IncidentError;
use incident_board_domain::id::IncidentId;
use incident_board_domain::incident::IncidentRecord;

use crate::ports::{Deletion, IncidentRepository};

/// Outcome of an update request.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The first matching record, after the patch was merged in.
    Updated(IncidentRecord),
    /// No record carries the requested id; nothing changed.
    NotFound,
}

/// Application service for incident CRUD operations.
pub struct IncidentService<R> {
    repo: R,
}

impl<R: IncidentRepository> IncidentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every incident in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_incidents(&self) -> Result<Vec<IncidentRecord>, IncidentError> {
        self.repo.get_all().await
    }

    /// Append a new incident as-is and return the whole sequence.
    ///
    /// The record is not validated and its `id`, if any, is not checked for
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(incident_id = record.id()))]
    pub async fn report_incident(
        &self,
        record: IncidentRecord,
    ) -> Result<Vec<IncidentRecord>, IncidentError> {
        let all = self.repo.append(record).await?;
        tracing::info!(total = all.len(), "incident reported");
        Ok(all)
    }

    /// Merge `patch` into the first incident addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(incident_id = %id, fields = patch.as_map().len()))]
    pub async fn update_incident(
        &self,
        id: &IncidentId,
        patch: IncidentRecord,
    ) -> Result<UpdateOutcome, IncidentError> {
        if let Some(updated) = self.repo.update_by_id(id, patch).await? {
            tracing::info!("incident updated");
            Ok(UpdateOutcome::Updated(updated))
        } else {
            tracing::debug!("no incident to update");
            Ok(UpdateOutcome::NotFound)
        }
    }

    /// Remove every incident addressed by `id`. Removing nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(incident_id = %id))]
    pub async fn delete_incident(&self, id: &IncidentId) -> Result<Deletion, IncidentError> {
        let deletion = self.repo.delete_by_id(id).await?;
        tracing::info!(
            removed = deletion.removed,
            remaining = deletion.remaining.len(),
            "incident delete applied"
        );
        Ok(deletion)
    }

    /// Number of incidents currently held.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_incidents(&self) -> Result<usize, IncidentError> {
        self.repo.count().await
    }
}
