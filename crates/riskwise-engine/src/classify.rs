//! Score-to-tier classification and per-tier recommendation text.
//!
//! Tiers are matched on the clamped integer score. The ranges per
//! condition are exhaustive over 0–10 and disjoint; anything outside that
//! range takes the `Invalid` sentinel rather than panicking, keeping the
//! pipeline total.

use riskwise_core::models::score::{CancerTier, GlaucomaTier};

pub fn classify_glaucoma(score: u8) -> GlaucomaTier {
    match score {
        0..=2 => GlaucomaTier::Low,
        3..=4 => GlaucomaTier::Moderate,
        5..=7 => GlaucomaTier::High,
        8..=10 => GlaucomaTier::Critical,
        _ => GlaucomaTier::Invalid,
    }
}

pub fn classify_cancer(score: u8) -> CancerTier {
    match score {
        0..=2 => CancerTier::Low,
        3..=4 => CancerTier::Moderate,
        5..=6 => CancerTier::Localized,
        7..=8 => CancerTier::High,
        9..=10 => CancerTier::VeryHigh,
        _ => CancerTier::Invalid,
    }
}

pub fn glaucoma_recommendation(tier: GlaucomaTier) -> &'static str {
    match tier {
        GlaucomaTier::Low => {
            "Routine monitoring is sufficient. Keep up a healthy lifestyle and \
             schedule regular eye examinations."
        }
        GlaucomaTier::Moderate => {
            "Consult an ophthalmologist about pressure-lowering eye drops; \
             laser therapy may be considered if pressure remains elevated."
        }
        GlaucomaTier::High => {
            "Discuss surgery or combination treatment with a specialist without delay."
        }
        GlaucomaTier::Critical => {
            "Immediate intervention is required: laser treatment or IOP-lowering \
             medication should begin as soon as possible."
        }
        GlaucomaTier::Invalid => "Invalid score",
    }
}

pub fn cancer_recommendation(tier: CancerTier) -> &'static str {
    match tier {
        CancerTier::Low => {
            "Risk is low. Continue routine screening; targeted therapy would be \
             the usual first line only if later findings indicate disease."
        }
        CancerTier::Moderate => {
            "Moderate risk. Seek oncological advice; immunotherapy is the usual \
             consideration at this level."
        }
        CancerTier::Localized => {
            "Findings are consistent with localized disease. Radiation therapy \
             is the usual course; consult an oncologist."
        }
        CancerTier::High => {
            "High risk. A chemotherapy evaluation with an oncologist is \
             recommended promptly."
        }
        CancerTier::VeryHigh => {
            "Very high risk. Surgery combined with chemotherapy or radiation is \
             typically indicated; seek specialist care immediately."
        }
        CancerTier::Invalid => "Invalid score",
    }
}
