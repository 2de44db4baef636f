//! Incident repository port — the ordered, in-process incident sequence.

use std::future::Future;

use incident_board_domain::error::IncidentError;
use incident_board_domain::id::IncidentId;
use incident_board_domain::incident::IncidentRecord;

/// Result of removing records by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Deletion {
    /// How many records matched and were removed.
    pub removed: usize,
    /// The sequence after removal, in insertion order.
    pub remaining: Vec<IncidentRecord>,
}

/// Ordered storage of [`IncidentRecord`]s.
///
/// Implementations must preserve insertion order and apply each mutating
/// call atomically with respect to other calls on the same instance.
pub trait IncidentRepository {
    /// Every record, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<IncidentRecord>, IncidentError>> + Send;

    /// Append `record` at the tail and return the whole sequence.
    fn append(
        &self,
        record: IncidentRecord,
    ) -> impl Future<Output = Result<Vec<IncidentRecord>, IncidentError>> + Send;

    /// Shallow-merge `patch` into the first record addressed by `id`.
    ///
    /// Returns the merged record, or `None` when nothing matched (in which
    /// case nothing was modified).
    fn update_by_id(
        &self,
        id: &IncidentId,
        patch: IncidentRecord,
    ) -> impl Future<Output = Result<Option<IncidentRecord>, IncidentError>> + Send;

    /// Remove every record addressed by `id`.
    fn delete_by_id(
        &self,
        id: &IncidentId,
    ) -> impl Future<Output = Result<Deletion, IncidentError>> + Send;

    /// Number of records currently held.
    fn count(&self) -> impl Future<Output = Result<usize, IncidentError>> + Send;
}
