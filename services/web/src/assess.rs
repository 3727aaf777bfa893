use clap::Args;
use heart_score::error::AppError;
use heart_score::heart::{assess, AssessmentView, RawInputs, RiskFactor, ValidationErrorsView};

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// History category score (0, 1, or 2)
    #[arg(long)]
    pub(crate) history: Option<u8>,
    /// ECG category score (0, 1, or 2)
    #[arg(long)]
    pub(crate) ecg: Option<u8>,
    /// Troponin category score (0, 1, or 2)
    #[arg(long)]
    pub(crate) troponin: Option<u8>,
    /// Patient age in years
    #[arg(long)]
    pub(crate) age: Option<f64>,
    /// Risk factor tokens, repeatable (smoker, htn, diabetes,
    /// hypercholesterolemia, familyHistory, obesity, knownAthero)
    #[arg(long = "risk-factor")]
    pub(crate) risk_factors: Vec<RiskFactor>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = RawInputs {
        history_score: args.history,
        ecg_score: args.ecg,
        trop_score: args.troponin,
        age_years: args.age,
        risk_factors: args.risk_factors.into_iter().collect(),
    };

    match assess(&raw) {
        Ok(view) => render_assessment(&view),
        Err(errors) => render_errors(&errors),
    }

    Ok(())
}

fn render_assessment(view: &AssessmentView) {
    println!("Key values");
    for entry in &view.result.components {
        println!("- {}: {}", entry.label, entry.display);
    }
    println!("- Total HEART score: {}", view.result.total_display);
    println!("- Risk category: {}", view.result.risk_label);

    if !view.result.risk_factors.is_empty() {
        println!("\nRisk factors: {}", view.result.risk_factors.join(", "));
    }

    println!("\nInterpretation");
    println!("{}", view.interpretation.summary);
    for note in &view.interpretation.notes {
        println!("- {note}");
    }

    println!("\nFlags");
    if let Some(placeholder) = view.flags_placeholder {
        println!("{placeholder}");
    }
    for flag in &view.flags {
        println!("[{}] {}", flag.level_label, flag.message);
    }
}

fn render_errors(errors: &ValidationErrorsView) {
    eprintln!("{}", errors.heading);
    for message in &errors.errors {
        eprintln!("- {message}");
    }
}
