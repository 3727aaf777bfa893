use super::domain::{Interpretation, RiskCategory, ScoreResult};

pub(crate) const LOW_SUMMARY: &str = "Low-risk HEART score (0–3).";
pub(crate) const INTERMEDIATE_SUMMARY: &str = "Intermediate-risk HEART score (4–6).";
pub(crate) const HIGH_SUMMARY: &str = "High-risk HEART score (7–10).";

pub(crate) const LOW_NOTE: &str = "Associated with 0.9–1.7% risk of MACE; in the HEART score study, these patients were typically discharged.";
pub(crate) const INTERMEDIATE_NOTE: &str = "Associated with a 12–16.6% estimated risk of MACE; in the HEART score study, these patients were typically admitted to the hospital.";
pub(crate) const HIGH_NOTE: &str = "Associated with 50–65% risk of MACE; in the HEART score study, these patients were candidates for early invasive measures.";

pub(crate) const MACE_DEFINITION: &str = "Major adverse cardiac events (MACE): acute myocardial infarction, need for percutaneous coronary intervention or coronary artery bypass graft, or death within 6 weeks.";
pub(crate) const PEDIATRIC_CAVEAT: &str = "HEART score was developed for adult chest pain populations; use in younger patients is not well validated.";

/// Map a computed score to its clinical reading.
///
/// Notes are emitted in a fixed order: the category note first, the
/// MACE definition second, and the pediatric caveat last when the
/// patient is under 18. Golden-output consumers rely on this order.
pub fn interpret(result: &ScoreResult) -> Interpretation {
    let (summary, category_note) = match result.risk_category {
        RiskCategory::Low => (LOW_SUMMARY, LOW_NOTE),
        RiskCategory::Intermediate => (INTERMEDIATE_SUMMARY, INTERMEDIATE_NOTE),
        RiskCategory::High => (HIGH_SUMMARY, HIGH_NOTE),
    };

    let mut notes = vec![category_note, MACE_DEFINITION];
    if result.age_years < 18.0 {
        notes.push(PEDIATRIC_CAVEAT);
    }

    Interpretation { summary, notes }
}
