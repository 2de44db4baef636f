//! # incident-board-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port [`IncidentRepository`](ports::IncidentRepository):
//!   the ordered incident sequence and its list/append/update/delete contract
//! - Define the driving use-case [`IncidentService`](services::incident_service::IncidentService),
//!   which turns repository results into typed outcomes the HTTP layer renders
//!
//! ## Dependency rule
//! Depends on `incident-board-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
