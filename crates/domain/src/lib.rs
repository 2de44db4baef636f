//! # incident-board-domain
//!
//! Pure domain model for the incident board.
//!
//! ## Responsibilities
//! - Define the schema-less [`IncidentRecord`](incident::IncidentRecord)
//!   and the matching rules used to address records by identifier
//! - Define [`IncidentId`](id::IncidentId)
//! - Provide the literal seed data sets loaded at process start
//! - Error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod incident;
pub mod seed;
