//! riskwise-engine
//!
//! The risk-scoring pipeline. Pure data in, pure data out — no storage, no
//! HTTP. Three stages: normalize heterogeneous answers into strict booleans,
//! apply the weighted formulas, classify and compose the recommendation
//! narrative.

pub mod classify;
pub mod compose;
pub mod error;
pub mod normalize;
pub mod questions;
pub mod score;
pub mod weights;

use riskwise_core::models::answers::{AnswerRecord, RawAnswerMap};
use riskwise_core::models::assessment::AssessmentResult;

use error::EngineError;

/// Score an already-normalized answer record.
pub fn score_record(answers: &AnswerRecord) -> AssessmentResult {
    let glaucoma = score::glaucoma_score(answers);
    let cancer = score::cancer_score(answers);
    compose::compose(glaucoma, cancer)
}

/// Score a submitted answer map. Total over its domain: any combination of
/// booleans, strings, numbers, and absent keys produces a result.
pub fn compute_assessment(answers: &RawAnswerMap) -> AssessmentResult {
    score_record(&normalize::normalize(answers))
}

/// Score a raw JSON payload, as handed over by the form endpoint or the
/// spreadsheet importer. The one structural failure is a payload that is
/// not an object at all; an object with missing or extra keys is fine.
pub fn compute_assessment_value(value: &serde_json::Value) -> Result<AssessmentResult, EngineError> {
    Ok(score_record(&normalize::from_json(value)?))
}
