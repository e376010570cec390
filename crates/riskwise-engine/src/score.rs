//! The weighted-rule calculator.

use riskwise_core::models::answers::AnswerRecord;
use riskwise_core::models::score::RiskScore;

use crate::weights::{
    CANCER_WEIGHTS, GLAUCOMA_WEIGHTS, SCREENING_AFFIRMED, SCREENING_DECLINED,
};

/// Weighted glaucoma sum before rounding and clamping.
pub fn glaucoma_raw(answers: &AnswerRecord) -> f64 {
    GLAUCOMA_WEIGHTS
        .iter()
        .filter(|(question, _)| answers.get(*question))
        .map(|(_, weight)| weight)
        .sum()
}

/// Weighted cancer sum before rounding and clamping. The screening term is
/// always present, with its sign depending on the answer.
pub fn cancer_raw(answers: &AnswerRecord) -> f64 {
    let additive: f64 = CANCER_WEIGHTS
        .iter()
        .filter(|(question, _)| answers.get(*question))
        .map(|(_, weight)| weight)
        .sum();
    let screening = if answers.regular_screening {
        SCREENING_AFFIRMED
    } else {
        SCREENING_DECLINED
    };
    additive + screening
}

pub fn glaucoma_score(answers: &AnswerRecord) -> RiskScore {
    RiskScore::from_raw(glaucoma_raw(answers))
}

pub fn cancer_score(answers: &AnswerRecord) -> RiskScore {
    RiskScore::from_raw(cancer_raw(answers))
}
