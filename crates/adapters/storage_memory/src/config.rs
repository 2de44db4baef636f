//! Store construction.

use incident_board_domain::seed::SeedSet;

use crate::incident_repo::InMemoryIncidentRepository;

/// Configuration for the in-memory storage adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Records loaded before the first request.
    pub seed: SeedSet,
}

impl Config {
    /// Build a repository holding the configured seed records.
    #[must_use]
    pub fn build(self) -> InMemoryIncidentRepository {
        let records = self.seed.records();
        tracing::debug!(seed = %self.seed, count = records.len(), "seeding incident store");
        InMemoryIncidentRepository::new(records)
    }
}
