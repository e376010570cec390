use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answers::AnswerRecord;
use super::score::{CancerTier, GlaucomaTier, HigherRisk, RiskScore};

/// The complete output of one scoring run.
///
/// Persisted verbatim by the storage layer and displayed as-is; historical
/// results are frozen at creation time and never rescored, even if the
/// weights change in a later release.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub glaucoma: RiskScore,
    pub cancer: RiskScore,
    pub glaucoma_tier: GlaucomaTier,
    pub cancer_tier: CancerTier,
    pub higher_risk: HigherRisk,
    /// Combined narrative with primary/secondary ordering.
    pub recommendations: String,
    /// Per-condition narrative, always populated; the dashboard shows both
    /// regardless of which condition is higher.
    pub glaucoma_recommendations: String,
    pub cancer_recommendations: String,
}

/// One stored assessment, as handed to the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    /// Display label chosen by the submitting user; doctors see this on the
    /// review dashboard.
    pub patient_label: Option<String>,
    pub answers: AnswerRecord,
    pub result: AssessmentResult,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(patient_label: Option<String>, answers: AnswerRecord, result: AssessmentResult) -> Self {
        AssessmentRecord {
            id: Uuid::new_v4(),
            patient_label,
            answers,
            result,
            created_at: jiff::Timestamp::now(),
        }
    }
}
