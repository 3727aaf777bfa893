use std::collections::BTreeSet;

use heart_score::heart::{
    assess, derive_flags, evaluate, interpret, FlagLevel, RawInputs, RiskCategory, RiskFactor,
    ValidationError,
};

fn submission(
    history: Option<u8>,
    ecg: Option<u8>,
    troponin: Option<u8>,
    age: Option<f64>,
    risk_factors: &[RiskFactor],
) -> RawInputs {
    RawInputs {
        history_score: history,
        ecg_score: ecg,
        trop_score: troponin,
        age_years: age,
        risk_factors: risk_factors.iter().copied().collect::<BTreeSet<_>>(),
    }
}

#[test]
fn young_patient_with_clean_workup_scores_zero() {
    let raw = submission(Some(0), Some(0), Some(0), Some(30.0), &[]);

    let result = evaluate(&raw).expect("complete submission scores");
    assert_eq!(result.age_points, 0);
    assert_eq!(result.risk_factor_points, 0);
    assert_eq!(result.total_score, 0);
    assert_eq!(result.risk_category, RiskCategory::Low);

    let interpretation = interpret(&result);
    let flags = derive_flags(&result, &interpretation);
    assert!(flags.is_empty());
}

#[test]
fn elderly_smoker_with_positive_markers_is_high_risk() {
    let raw = submission(
        Some(2),
        Some(1),
        Some(1),
        Some(70.0),
        &[
            RiskFactor::Smoker,
            RiskFactor::Hypertension,
            RiskFactor::Diabetes,
        ],
    );

    let result = evaluate(&raw).expect("complete submission scores");
    assert_eq!(result.age_points, 2);
    assert_eq!(result.risk_factor_points, 2);
    assert_eq!(result.total_score, 8);
    assert_eq!(result.risk_category, RiskCategory::High);

    let interpretation = interpret(&result);
    let flags = derive_flags(&result, &interpretation);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].level, FlagLevel::Danger);
}

#[test]
fn known_atherosclerosis_alone_pushes_into_intermediate() {
    let raw = submission(
        Some(1),
        Some(1),
        Some(1),
        Some(50.0),
        &[RiskFactor::KnownAthero],
    );

    let result = evaluate(&raw).expect("complete submission scores");
    assert_eq!(result.age_points, 1);
    assert_eq!(result.risk_factor_points, 2);
    assert_eq!(result.total_score, 6);
    assert_eq!(result.risk_category, RiskCategory::Intermediate);

    let interpretation = interpret(&result);
    let flags = derive_flags(&result, &interpretation);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].level, FlagLevel::Warning);
}

#[test]
fn unset_history_blocks_scoring_with_one_message() {
    let raw = submission(None, Some(0), Some(0), Some(40.0), &[]);

    let errors = evaluate(&raw).expect_err("incomplete submission rejects");
    assert_eq!(errors, vec![ValidationError::MissingHistory]);
    assert_eq!(errors[0].to_string(), "History category is required.");
}

#[test]
fn pediatric_low_risk_patient_gets_caveat_note_and_age_flag() {
    let raw = submission(Some(0), Some(0), Some(0), Some(16.0), &[]);

    let result = evaluate(&raw).expect("complete submission scores");
    assert_eq!(result.total_score, 0);
    assert_eq!(result.risk_category, RiskCategory::Low);

    let interpretation = interpret(&result);
    assert!(interpretation
        .notes
        .last()
        .expect("notes are never empty")
        .contains("younger patients"));

    let flags = derive_flags(&result, &interpretation);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].level, FlagLevel::Warning);
    assert!(flags[0].message.contains("adult chest pain populations"));
}

#[test]
fn assess_packages_both_pipeline_outcomes() {
    let ok = assess(&submission(Some(0), Some(0), Some(0), Some(30.0), &[]))
        .expect("valid submission renders");
    assert_eq!(ok.result.total_display, "0 / 10");

    let err = assess(&submission(None, None, None, None, &[]))
        .expect_err("empty submission renders the error view");
    assert_eq!(err.errors.len(), 4);
}
