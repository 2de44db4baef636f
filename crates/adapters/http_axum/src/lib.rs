//! # incident-board-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API over incidents (`/incidents`, `/incidents/{incident_id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON responses
//! - Apply permissive CORS headers to every response and log each request
//!
//! ## Dependency rule
//! Depends on `incident-board-app` (for port traits and services) and
//! `incident-board-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
