use serde::Serialize;

use super::domain::{Flag, FlagLevel, Interpretation, RawInputs, RiskCategory, ScoreResult};
use super::engine::evaluate;
use super::flags::derive_flags;
use super::interpret::interpret;
use super::validation::ValidationError;

pub(crate) const NO_FLAGS_PLACEHOLDER: &str =
    "No critical flags based on the provided values. Always correlate clinically.";
pub(crate) const VALIDATION_HEADING: &str = "Check your inputs";

/// One labeled component line in the rendered breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentEntry {
    pub label: &'static str,
    pub points: u8,
    pub display: String,
}

/// Score breakdown as the presentation layer renders it: labeled
/// component lines, the total with its "/ 10" suffix, and the
/// category label.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResultView {
    pub components: Vec<ComponentEntry>,
    pub total_score: i32,
    pub total_display: String,
    pub risk_category: RiskCategory,
    pub risk_label: String,
    pub risk_factors: Vec<&'static str>,
}

impl ScoreResultView {
    pub fn from_result(result: &ScoreResult) -> Self {
        let components = vec![
            ComponentEntry {
                label: "History component",
                points: result.history_score,
                display: format!("{} pts", result.history_score),
            },
            ComponentEntry {
                label: "ECG component",
                points: result.ecg_score,
                display: format!("{} pts", result.ecg_score),
            },
            ComponentEntry {
                label: "Age component",
                points: result.age_points,
                display: format!("{} pts (Age {:.0} yrs)", result.age_points, result.age_years),
            },
            ComponentEntry {
                label: "Risk factor component",
                points: result.risk_factor_points,
                display: format!("{} pts", result.risk_factor_points),
            },
            ComponentEntry {
                label: "Troponin component",
                points: result.trop_score,
                display: format!("{} pts", result.trop_score),
            },
        ];

        Self {
            components,
            total_score: result.total_score,
            total_display: format!("{} / 10", result.total_score),
            risk_category: result.risk_category,
            risk_label: format!("{} risk", result.risk_category.label()),
            risk_factors: result
                .risk_factors
                .iter()
                .map(|factor| factor.label())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InterpretationView {
    pub summary: &'static str,
    pub notes: Vec<&'static str>,
}

impl InterpretationView {
    pub fn from_interpretation(interpretation: &Interpretation) -> Self {
        Self {
            summary: interpretation.summary,
            notes: interpretation.notes.clone(),
        }
    }
}

/// Flag rendered as a styled alert pill.
#[derive(Debug, Clone, Serialize)]
pub struct FlagView {
    pub level: FlagLevel,
    pub level_label: &'static str,
    pub message: &'static str,
}

impl Flag {
    pub fn to_view(&self) -> FlagView {
        FlagView {
            level: self.level,
            level_label: self.level.label(),
            message: self.message,
        }
    }
}

/// Complete render payload for a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub result: ScoreResultView,
    pub interpretation: InterpretationView,
    pub flags: Vec<FlagView>,
    /// Placeholder prose shown instead of alert pills when no flag fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags_placeholder: Option<&'static str>,
}

/// Accumulated validation messages, rendered together as one list.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorsView {
    pub heading: &'static str,
    pub errors: Vec<String>,
}

impl ValidationErrorsView {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        Self {
            heading: VALIDATION_HEADING,
            errors: errors.iter().map(|error| error.to_string()).collect(),
        }
    }
}

/// Run the whole pipeline on raw form values and package the outcome
/// for rendering. The two-variant result forces callers to handle the
/// error path explicitly.
pub fn assess(raw: &RawInputs) -> Result<AssessmentView, ValidationErrorsView> {
    let result = evaluate(raw).map_err(|errors| ValidationErrorsView::from_errors(&errors))?;
    let interpretation = interpret(&result);
    let flags = derive_flags(&result, &interpretation);

    let flag_views: Vec<FlagView> = flags.iter().map(Flag::to_view).collect();
    let flags_placeholder = flag_views.is_empty().then_some(NO_FLAGS_PLACEHOLDER);

    Ok(AssessmentView {
        result: ScoreResultView::from_result(&result),
        interpretation: InterpretationView::from_interpretation(&interpretation),
        flags: flag_views,
        flags_placeholder,
    })
}
