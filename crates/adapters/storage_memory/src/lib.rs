//! # incident-board-adapter-storage-memory
//!
//! Process-local incident store.
//!
//! ## Responsibilities
//! - Implement [`IncidentRepository`](incident_board_app::ports::IncidentRepository)
//!   over an ordered `Vec` held in memory
//! - Serialize mutations behind a single async `RwLock` so concurrent
//!   requests never lose writes
//! - Seed the sequence from a [`SeedSet`](incident_board_domain::seed::SeedSet)
//!   at construction
//!
//! Nothing survives a restart.
//!
//! ## Dependency rule
//! Depends on `incident-board-app` (for port traits) and `incident-board-domain`
//! (for domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod config;
mod incident_repo;

pub use config::Config;
pub use incident_repo::InMemoryIncidentRepository;
