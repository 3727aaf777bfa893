use super::domain::{Flag, FlagLevel, Interpretation, RiskCategory, ScoreResult};

pub(crate) const HIGH_RISK_ALERT: &str =
    "High-risk HEART score (≥7). Consider urgent evaluation per ACS protocol.";
pub(crate) const INTERMEDIATE_RISK_ALERT: &str =
    "Intermediate-risk HEART score (4–6). Requires close clinical follow-up and appropriate testing.";
pub(crate) const PEDIATRIC_ALERT: &str =
    "Tool is primarily validated for adult chest pain populations (≥18 years).";

/// Derive actionable alerts from a computed score.
///
/// The risk-based flag (if any) always precedes the age-based flag
/// (if any), so zero, one, or two flags result. Flag content depends
/// only on the risk category and age; the interpretation is part of
/// the call contract but not consulted.
pub fn derive_flags(result: &ScoreResult, _interpretation: &Interpretation) -> Vec<Flag> {
    let mut flags = Vec::new();

    match result.risk_category {
        RiskCategory::High => flags.push(Flag {
            level: FlagLevel::Danger,
            message: HIGH_RISK_ALERT,
        }),
        RiskCategory::Intermediate => flags.push(Flag {
            level: FlagLevel::Warning,
            message: INTERMEDIATE_RISK_ALERT,
        }),
        RiskCategory::Low => {}
    }

    if result.age_years < 18.0 {
        flags.push(Flag {
            level: FlagLevel::Warning,
            message: PEDIATRIC_ALERT,
        });
    }

    flags
}
