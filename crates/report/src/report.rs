use serde::Serialize;

use crate::{Predictor, WasteInput, compute_risk_score, total_kg, validate_input};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub emission: f64,
    pub risk_score: f64,
    pub message: String,
}

pub fn build_message(input: &WasteInput, emission: f64) -> String {
    format!(
        "You cleaned {}kg, prevented {}kg CO2e! 🎉",
        total_kg(input),
        emission
    )
}

/// Builds the full report. Any prediction failure fails the whole report.
pub async fn generate_report(
    predictor: &dyn Predictor,
    input: &WasteInput,
) -> ecoclean_shared::Result<Report> {
    validate_input(input)?;

    let emission = predictor.predict_emission(input).await?;

    Ok(Report {
        emission,
        risk_score: compute_risk_score(input),
        message: build_message(input, emission),
    })
}
