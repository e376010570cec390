//! Result composition: higher-risk resolution and the combined narrative.

use riskwise_core::models::assessment::AssessmentResult;
use riskwise_core::models::score::{HigherRisk, RiskScore};

use crate::classify::{
    cancer_recommendation, classify_cancer, classify_glaucoma, glaucoma_recommendation,
};

const ALL_CLEAR: &str =
    "Overall risk is low for both conditions. Maintain routine health check-ups.";

/// Build the final [`AssessmentResult`] from the two scored conditions.
///
/// The comparison is on risk percentages. A strict winner becomes the
/// primary concern; the other side is mentioned only when its score is
/// nonzero. An exact nonzero tie lists both without ranking.
pub fn compose(glaucoma: RiskScore, cancer: RiskScore) -> AssessmentResult {
    let glaucoma_tier = classify_glaucoma(glaucoma.score);
    let cancer_tier = classify_cancer(cancer.score);
    let glaucoma_text = glaucoma_recommendation(glaucoma_tier);
    let cancer_text = cancer_recommendation(cancer_tier);

    let (higher_risk, recommendations) = if glaucoma.risk_percentage > cancer.risk_percentage {
        let mut narrative = format!(
            "Primary concern (glaucoma, {}): {}",
            glaucoma_tier.label(),
            glaucoma_text
        );
        if cancer.score > 0 {
            narrative.push_str(&format!(
                "\nSecondary concern (cancer, {}): {}",
                cancer_tier.label(),
                cancer_text
            ));
        }
        (HigherRisk::Glaucoma, narrative)
    } else if cancer.risk_percentage > glaucoma.risk_percentage {
        let mut narrative = format!(
            "Primary concern (cancer, {}): {}",
            cancer_tier.label(),
            cancer_text
        );
        if glaucoma.score > 0 {
            narrative.push_str(&format!(
                "\nSecondary concern (glaucoma, {}): {}",
                glaucoma_tier.label(),
                glaucoma_text
            ));
        }
        (HigherRisk::Cancer, narrative)
    } else if glaucoma.risk_percentage > 0 {
        let narrative = format!(
            "Equal risk for glaucoma and cancer.\nGlaucoma ({}): {}\nCancer ({}): {}",
            glaucoma_tier.label(),
            glaucoma_text,
            cancer_tier.label(),
            cancer_text
        );
        (HigherRisk::Both, narrative)
    } else {
        (HigherRisk::None, ALL_CLEAR.to_string())
    };

    AssessmentResult {
        glaucoma,
        cancer,
        glaucoma_tier,
        cancer_tier,
        higher_risk,
        recommendations,
        glaucoma_recommendations: glaucoma_text.to_string(),
        cancer_recommendations: cancer_text.to_string(),
    }
}
