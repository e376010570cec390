//! Weight tables for the two formulas.
//!
//! These are the authoritative weighted-decimal tables matching the
//! persisted schema's field documentation. Immutable by construction; the
//! calculator only ever reads them.

use riskwise_core::models::answers::QuestionId;

/// Additive glaucoma weights. The sum exceeds the scale ceiling; clamping
/// in [`RiskScore::from_raw`](riskwise_core::models::score::RiskScore::from_raw)
/// enforces the [0, 10] bound.
pub const GLAUCOMA_WEIGHTS: [(QuestionId, f64); 9] = [
    (QuestionId::ElevatedIop, 2.0),
    (QuestionId::PoorVision, 1.5),
    (QuestionId::SuddenEyePain, 1.5),
    (QuestionId::FamilyHistoryGlaucoma, 1.0),
    (QuestionId::HalosOrTunnelVision, 1.0),
    (QuestionId::SteroidUse, 0.8),
    (QuestionId::EthnicityRisk, 0.5),
    (QuestionId::Diabetes, 0.91),
    (QuestionId::AgeOver40, 0.3),
];

/// Additive cancer weights. `regularScreening` is deliberately absent: it
/// is the one signed contribution and must not be flattened into a plain
/// boolean weight.
pub const CANCER_WEIGHTS: [(QuestionId, f64); 5] = [
    (QuestionId::UnexplainedWeightLoss, 3.0),
    (QuestionId::FamilyHistoryCancer, 1.5),
    (QuestionId::TobaccoOrAlcohol, 1.5),
    (QuestionId::HighRiskEnvironment, 1.5),
    (QuestionId::Diabetes, 1.5),
];

/// Regular screening is protective: −1.0 when affirmed, +1.0 when not.
pub const SCREENING_AFFIRMED: f64 = -1.0;
pub const SCREENING_DECLINED: f64 = 1.0;
