//! HEART chest-pain risk score calculator and its offline-first
//! delivery collaborators.
//!
//! The `heart` module holds the scoring pipeline proper: intake
//! validation, sub-score computation, risk classification,
//! interpretation, and flag derivation, plus the presentation views
//! and an axum router exposing the pipeline over HTTP. The `pwa`
//! module models the installable-web-app collaborators: a versioned
//! cache-first asset cache and the install-hint banner decision.

pub mod config;
pub mod error;
pub mod heart;
pub mod pwa;
pub mod telemetry;
