use std::collections::BTreeSet;

use super::domain::{RawInputs, RiskCategory, RiskFactor, ScoreInput, ScoreResult};
use super::validation::{validate, ValidationError};

/// HEART age sub-score. Step function with the lower bound of each
/// band inclusive: under 45 scores 0, 45 to 64 scores 1, 65 and over
/// scores 2.
pub fn age_points(age_years: f64) -> u8 {
    if age_years < 45.0 {
        0
    } else if age_years < 65.0 {
        1
    } else {
        2
    }
}

/// HEART risk-factor sub-score.
///
/// Known atherosclerotic disease saturates the component on its own,
/// regardless of what else is checked. Otherwise the remaining
/// factors are counted: none scores 0, one or two score 1, three or
/// more score 2.
pub fn risk_factor_points(risk_factors: &BTreeSet<RiskFactor>) -> u8 {
    if risk_factors.contains(&RiskFactor::KnownAthero) {
        return 2;
    }

    let count = risk_factors
        .iter()
        .filter(|factor| !factor.is_sentinel())
        .count();

    match count {
        0 => 0,
        1..=2 => 1,
        _ => 2,
    }
}

/// Compute the full score from validated inputs.
///
/// The total is a straight sum of the five component terms. Bounded
/// inputs keep it in 0..=10, but nothing here relies on that.
pub fn score(input: ScoreInput) -> ScoreResult {
    let age_points = age_points(input.age_years);
    let risk_factor_points = risk_factor_points(&input.risk_factors);

    let total_score = i32::from(input.history_score)
        + i32::from(input.ecg_score)
        + i32::from(age_points)
        + i32::from(risk_factor_points)
        + i32::from(input.trop_score);

    let risk_category = RiskCategory::from_total(total_score);

    ScoreResult {
        age_years: input.age_years,
        history_score: input.history_score,
        ecg_score: input.ecg_score,
        trop_score: input.trop_score,
        risk_factors: input.risk_factors,
        age_points,
        risk_factor_points,
        total_score,
        risk_category,
    }
}

/// Run intake validation and scoring as one tagged outcome.
///
/// Callers get either a [`ScoreResult`] or the full accumulated error
/// list; there is no path on which unvalidated input reaches the
/// scoring functions.
pub fn evaluate(raw: &RawInputs) -> Result<ScoreResult, Vec<ValidationError>> {
    let input = validate(raw)?;
    Ok(score(input))
}
