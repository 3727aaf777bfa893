use std::collections::BTreeSet;

use crate::heart::domain::{RawInputs, RiskFactor};

pub(crate) fn raw_inputs(
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
        risk_factors: risk_factors.iter().copied().collect(),
    }
}

pub(crate) fn complete_inputs(age: f64, risk_factors: &[RiskFactor]) -> RawInputs {
    raw_inputs(Some(1), Some(1), Some(1), Some(age), risk_factors)
}

pub(crate) fn factors(list: &[RiskFactor]) -> BTreeSet<RiskFactor> {
    list.iter().copied().collect()
}
