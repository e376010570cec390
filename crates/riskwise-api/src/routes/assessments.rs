use axum::Json;
use serde::Deserialize;

use riskwise_core::models::assessment::AssessmentRecord;
use riskwise_engine::normalize;

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub patient_label: Option<String>,
    /// Raw answer map as submitted by the form or spreadsheet importer.
    /// Values may be booleans, strings, or numbers; keys may be missing.
    pub answers: serde_json::Value,
}

/// Score a submission and hand back a fresh record for the caller to
/// persist. This service stores nothing.
pub async fn score_assessment(
    Json(req): Json<ScoreRequest>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let answers = normalize::from_json(&req.answers)?;
    let result = riskwise_engine::score_record(&answers);
    Ok(Json(AssessmentRecord::new(req.patient_label, answers, result)))
}
