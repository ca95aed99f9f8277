use axum::{Json, extract::State};
use ecoclean_report::{Report, WasteInput, generate_report};
use serde::Deserialize;

use super::AppState;
use crate::error::AppResult;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    litter_input: WasteInput,
}

/// POST /api/aimodel/generate-ml-report
#[tracing::instrument(skip_all, fields(categories = body.litter_input.len()))]
pub async fn generate_ml_report(
    State(state): State<AppState>,
    Json(body): Json<ReportRequest>,
) -> AppResult<Json<Report>> {
    let report = generate_report(state.predictor.as_ref(), &body.litter_input).await?;

    Ok(Json(report))
}
