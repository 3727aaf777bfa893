use super::common::*;
use crate::heart::domain::{Flag, FlagLevel};
use crate::heart::engine::evaluate;
use crate::heart::flags::derive_flags;
use crate::heart::interpret::interpret;

fn flags_for(age: f64, history: u8, ecg: u8, troponin: u8) -> Vec<Flag> {
    let raw = raw_inputs(Some(history), Some(ecg), Some(troponin), Some(age), &[]);
    let result = evaluate(&raw).expect("valid inputs score");
    let interpretation = interpret(&result);
    derive_flags(&result, &interpretation)
}

#[test]
fn low_risk_adults_raise_no_flags() {
    assert!(flags_for(30.0, 0, 0, 0).is_empty());
}

#[test]
fn intermediate_risk_raises_a_single_warning() {
    let flags = flags_for(70.0, 2, 0, 0);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].level, FlagLevel::Warning);
    assert!(flags[0].message.contains("close clinical follow-up"));
}

#[test]
fn high_risk_raises_a_single_danger_flag() {
    let flags = flags_for(70.0, 2, 2, 2);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].level, FlagLevel::Danger);
    assert!(flags[0].message.contains("ACS protocol"));
}

#[test]
fn minors_get_an_age_flag_even_at_low_risk() {
    let flags = flags_for(16.0, 0, 0, 0);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].level, FlagLevel::Warning);
    assert!(flags[0].message.contains("adult chest pain populations"));
}

#[test]
fn risk_flag_precedes_the_age_flag() {
    let flags = flags_for(16.0, 2, 2, 2);
    assert_eq!(flags.len(), 2);
    assert_eq!(flags[0].level, FlagLevel::Danger);
    assert!(flags[0].message.contains("ACS protocol"));
    assert_eq!(flags[1].level, FlagLevel::Warning);
    assert!(flags[1].message.contains("adult chest pain populations"));
}
