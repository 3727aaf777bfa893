use super::domain::{RawInputs, ScoreInput};

/// User-facing intake failures. Display text is shown verbatim on the
/// form, so the wording here is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("History category is required.")]
    MissingHistory,
    #[error("ECG category is required.")]
    MissingEcg,
    #[error("Troponin category is required.")]
    MissingTroponin,
    #[error("Age is required and must be a number.")]
    MissingAge,
    #[error("Age appears outside typical human range (0–120).")]
    ImplausibleAge,
}

/// Check a submission for completeness and plausibility.
///
/// Every rule runs; failures accumulate so the user can fix the whole
/// form in one pass. An implausible age blocks computation exactly
/// like a missing one. Risk factors are never validated: any subset
/// of the vocabulary, including the empty set, is acceptable.
pub fn validate(raw: &RawInputs) -> Result<ScoreInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if raw.history_score.is_none() {
        errors.push(ValidationError::MissingHistory);
    }
    if raw.ecg_score.is_none() {
        errors.push(ValidationError::MissingEcg);
    }
    if raw.trop_score.is_none() {
        errors.push(ValidationError::MissingTroponin);
    }

    match raw.age_years {
        None => errors.push(ValidationError::MissingAge),
        Some(age) if age.is_nan() => errors.push(ValidationError::MissingAge),
        Some(age) if !(0.0..=120.0).contains(&age) => {
            errors.push(ValidationError::ImplausibleAge)
        }
        Some(_) => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match (
        raw.history_score,
        raw.ecg_score,
        raw.trop_score,
        raw.age_years,
    ) {
        (Some(history_score), Some(ecg_score), Some(trop_score), Some(age_years)) => {
            Ok(ScoreInput {
                history_score,
                ecg_score,
                trop_score,
                age_years,
                risk_factors: raw.risk_factors.clone(),
            })
        }
        _ => unreachable!("every missing field was recorded as an error above"),
    }
}
