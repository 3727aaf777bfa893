use super::common::*;
use crate::heart::engine::evaluate;
use crate::heart::interpret::interpret;

fn interpretation_for(age: f64, history: u8, ecg: u8, troponin: u8) -> crate::heart::Interpretation {
    let raw = raw_inputs(Some(history), Some(ecg), Some(troponin), Some(age), &[]);
    let result = evaluate(&raw).expect("valid inputs score");
    interpret(&result)
}

#[test]
fn low_risk_summary_cites_discharge() {
    let interpretation = interpretation_for(30.0, 0, 0, 0);
    assert_eq!(interpretation.summary, "Low-risk HEART score (0–3).");
    assert!(interpretation.notes[0].contains("0.9–1.7%"));
    assert!(interpretation.notes[0].contains("discharged"));
}

#[test]
fn intermediate_risk_summary_cites_admission() {
    let interpretation = interpretation_for(70.0, 2, 0, 0);
    assert_eq!(
        interpretation.summary,
        "Intermediate-risk HEART score (4–6)."
    );
    assert!(interpretation.notes[0].contains("12–16.6%"));
    assert!(interpretation.notes[0].contains("admitted"));
}

#[test]
fn high_risk_summary_cites_early_invasive_measures() {
    let interpretation = interpretation_for(70.0, 2, 2, 2);
    assert_eq!(interpretation.summary, "High-risk HEART score (7–10).");
    assert!(interpretation.notes[0].contains("50–65%"));
    assert!(interpretation.notes[0].contains("early invasive measures"));
}

#[test]
fn mace_definition_follows_the_category_note_for_every_band() {
    for (history, ecg, troponin) in [(0, 0, 0), (2, 0, 0), (2, 2, 2)] {
        let interpretation = interpretation_for(70.0, history, ecg, troponin);
        assert!(
            interpretation.notes[1].starts_with("Major adverse cardiac events (MACE):"),
            "MACE definition must be the second note"
        );
        assert!(interpretation.notes[1].contains("death within 6 weeks"));
    }
}

#[test]
fn pediatric_caveat_is_appended_last_for_minors() {
    let interpretation = interpretation_for(16.0, 0, 0, 0);
    assert_eq!(interpretation.notes.len(), 3);
    assert!(interpretation.notes[0].contains("MACE"));
    assert!(interpretation.notes[1].starts_with("Major adverse cardiac events"));
    assert!(interpretation.notes[2].contains("younger patients"));
}

#[test]
fn adults_get_no_pediatric_caveat() {
    let interpretation = interpretation_for(18.0, 0, 0, 0);
    assert_eq!(interpretation.notes.len(), 2);
}
