//! HEART score pipeline: intake validation, sub-score computation,
//! risk classification, interpretation, and flag derivation.
//!
//! The pipeline is a stateless chain of pure functions. Raw form
//! values enter through [`RawInputs`], the validator is the sole gate
//! in front of the scoring engine, and every derived artifact
//! ([`ScoreResult`], [`Interpretation`], the flag list) is rebuilt
//! from scratch on each submission.

pub mod domain;
pub mod engine;
pub mod flags;
pub mod interpret;
pub mod router;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Flag, FlagLevel, Interpretation, RawInputs, RiskCategory, RiskFactor, ScoreInput, ScoreResult,
};
pub use engine::{age_points, evaluate, risk_factor_points, score};
pub use flags::derive_flags;
pub use interpret::interpret;
pub use router::heart_router;
pub use validation::{validate, ValidationError};
pub use views::{
    assess, AssessmentView, ComponentEntry, FlagView, InterpretationView, ScoreResultView,
    ValidationErrorsView,
};
