use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Raw, unvalidated form values handed over by the presentation layer.
///
/// `None` covers both an absent field and one that failed to parse
/// upstream. The validator is the only gate between this type and the
/// scoring engine; nothing here is trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputs {
    #[serde(default)]
    pub history_score: Option<u8>,
    #[serde(default)]
    pub ecg_score: Option<u8>,
    #[serde(default)]
    pub trop_score: Option<u8>,
    #[serde(default)]
    pub age_years: Option<f64>,
    #[serde(default)]
    pub risk_factors: BTreeSet<RiskFactor>,
}

/// Validated counterpart of [`RawInputs`]. Only the validator
/// constructs this, so the scoring engine never sees missing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInput {
    pub history_score: u8,
    pub ecg_score: u8,
    pub trop_score: u8,
    pub age_years: f64,
    pub risk_factors: BTreeSet<RiskFactor>,
}

/// Fixed risk-factor vocabulary from the intake form. Checkbox
/// semantics: a factor is either present or absent, never repeated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactor {
    Smoker,
    #[serde(rename = "htn")]
    Hypertension,
    Diabetes,
    Hypercholesterolemia,
    FamilyHistory,
    Obesity,
    /// Known atherosclerotic disease. Sentinel: saturates the
    /// risk-factor sub-score on its own and is excluded from the
    /// count of other factors.
    KnownAthero,
}

impl RiskFactor {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Smoker => "smoker",
            Self::Hypertension => "htn",
            Self::Diabetes => "diabetes",
            Self::Hypercholesterolemia => "hypercholesterolemia",
            Self::FamilyHistory => "familyHistory",
            Self::Obesity => "obesity",
            Self::KnownAthero => "knownAthero",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Smoker => "Current smoker",
            Self::Hypertension => "Hypertension",
            Self::Diabetes => "Diabetes mellitus",
            Self::Hypercholesterolemia => "Hypercholesterolemia",
            Self::FamilyHistory => "Family history of CAD",
            Self::Obesity => "Obesity",
            Self::KnownAthero => "Known atherosclerotic disease",
        }
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::KnownAthero)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk factor token; expected one of smoker, htn, diabetes, hypercholesterolemia, familyHistory, obesity, knownAthero")]
pub struct UnknownRiskFactor;

impl std::str::FromStr for RiskFactor {
    type Err = UnknownRiskFactor;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "smoker" => Ok(Self::Smoker),
            "htn" => Ok(Self::Hypertension),
            "diabetes" => Ok(Self::Diabetes),
            "hypercholesterolemia" => Ok(Self::Hypercholesterolemia),
            "familyHistory" => Ok(Self::FamilyHistory),
            "obesity" => Ok(Self::Obesity),
            "knownAthero" => Ok(Self::KnownAthero),
            _ => Err(UnknownRiskFactor),
        }
    }
}

/// Risk banding of the total HEART score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Intermediate,
    High,
}

impl RiskCategory {
    /// Band a total score. Total over all integers so an out-of-range
    /// sum still classifies by the same rule.
    pub const fn from_total(total: i32) -> Self {
        if total <= 3 {
            Self::Low
        } else if total <= 6 {
            Self::Intermediate
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Intermediate => "Intermediate",
            Self::High => "High",
        }
    }
}

/// Fully computed score. Immutable once built; `total_score` is the
/// arithmetic sum of exactly the five component terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub age_years: f64,
    pub history_score: u8,
    pub ecg_score: u8,
    pub trop_score: u8,
    pub risk_factors: BTreeSet<RiskFactor>,
    pub age_points: u8,
    pub risk_factor_points: u8,
    pub total_score: i32,
    pub risk_category: RiskCategory,
}

/// Human-readable reading of a [`ScoreResult`]. Note order is fixed:
/// category note, MACE definition, then the pediatric caveat when the
/// patient is a minor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub summary: &'static str,
    pub notes: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagLevel {
    Warning,
    Danger,
}

impl FlagLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        }
    }
}

/// Actionable alert derived from the score and patient age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub level: FlagLevel,
    pub message: &'static str,
}
