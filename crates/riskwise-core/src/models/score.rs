use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The two screened conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Condition {
    Glaucoma,
    Cancer,
}

/// A single condition's scored result.
///
/// `raw_value` is the weighted sum before rounding and clamping, kept for
/// audit display. `score` is always in [0, 10] and `risk_percentage` is
/// mechanically `score * 10`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskScore {
    pub raw_value: f64,
    pub score: u8,
    pub risk_percentage: u8,
}

impl RiskScore {
    /// Round-half-up then clamp the weighted sum into the [0, 10] scale.
    pub fn from_raw(raw_value: f64) -> RiskScore {
        let score = raw_value.round().clamp(0.0, 10.0) as u8;
        RiskScore {
            raw_value,
            score,
            risk_percentage: score * 10,
        }
    }
}

/// Which condition carries the higher risk percentage for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HigherRisk {
    Glaucoma,
    Cancer,
    /// Both percentages equal and nonzero.
    Both,
    /// Both percentages zero.
    None,
}

/// Glaucoma severity tier, derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GlaucomaTier {
    Low,
    Moderate,
    High,
    Critical,
    /// Defensive sentinel for a score outside [0, 10]; never produced by
    /// the calculator.
    Invalid,
}

impl GlaucomaTier {
    pub fn label(&self) -> &'static str {
        match self {
            GlaucomaTier::Low => "Low risk",
            GlaucomaTier::Moderate => "Moderate risk",
            GlaucomaTier::High => "High risk",
            GlaucomaTier::Critical => "Critical / Acute risk",
            GlaucomaTier::Invalid => "Invalid score",
        }
    }
}

/// Cancer severity tier, derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CancerTier {
    Low,
    Moderate,
    Localized,
    High,
    VeryHigh,
    /// Defensive sentinel for a score outside [0, 10].
    Invalid,
}

impl CancerTier {
    pub fn label(&self) -> &'static str {
        match self {
            CancerTier::Low => "Low risk",
            CancerTier::Moderate => "Moderate risk",
            CancerTier::Localized => "Localized disease likely",
            CancerTier::High => "High risk",
            CancerTier::VeryHigh => "Very high risk",
            CancerTier::Invalid => "Invalid score",
        }
    }
}
