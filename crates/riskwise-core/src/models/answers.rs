use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which condition a question feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionGroup {
    Glaucoma,
    Cancer,
    /// Diabetes status contributes to both formulas.
    Shared,
}

/// Canonical identifier for one questionnaire item.
///
/// The serialized form is the camelCase wire key used by the web form and
/// the spreadsheet importer (e.g. `elevatedIOP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuestionId {
    #[serde(rename = "elevatedIOP")]
    ElevatedIop,
    #[serde(rename = "poorVision")]
    PoorVision,
    #[serde(rename = "suddenEyePain")]
    SuddenEyePain,
    #[serde(rename = "familyHistoryGlaucoma")]
    FamilyHistoryGlaucoma,
    #[serde(rename = "halosOrTunnelVision")]
    HalosOrTunnelVision,
    #[serde(rename = "steroidUse")]
    SteroidUse,
    #[serde(rename = "ethnicityRisk")]
    EthnicityRisk,
    #[serde(rename = "ageOver40")]
    AgeOver40,
    #[serde(rename = "unexplainedWeightLoss")]
    UnexplainedWeightLoss,
    #[serde(rename = "familyHistoryCancer")]
    FamilyHistoryCancer,
    #[serde(rename = "tobaccoOrAlcohol")]
    TobaccoOrAlcohol,
    #[serde(rename = "highRiskEnvironment")]
    HighRiskEnvironment,
    #[serde(rename = "regularScreening")]
    RegularScreening,
    #[serde(rename = "diabetes")]
    Diabetes,
}

impl QuestionId {
    /// Every canonical question, in form display order.
    pub const ALL: [QuestionId; 14] = [
        QuestionId::ElevatedIop,
        QuestionId::PoorVision,
        QuestionId::SuddenEyePain,
        QuestionId::FamilyHistoryGlaucoma,
        QuestionId::HalosOrTunnelVision,
        QuestionId::SteroidUse,
        QuestionId::EthnicityRisk,
        QuestionId::AgeOver40,
        QuestionId::UnexplainedWeightLoss,
        QuestionId::FamilyHistoryCancer,
        QuestionId::TobaccoOrAlcohol,
        QuestionId::HighRiskEnvironment,
        QuestionId::RegularScreening,
        QuestionId::Diabetes,
    ];

    /// The camelCase wire key for this question.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionId::ElevatedIop => "elevatedIOP",
            QuestionId::PoorVision => "poorVision",
            QuestionId::SuddenEyePain => "suddenEyePain",
            QuestionId::FamilyHistoryGlaucoma => "familyHistoryGlaucoma",
            QuestionId::HalosOrTunnelVision => "halosOrTunnelVision",
            QuestionId::SteroidUse => "steroidUse",
            QuestionId::EthnicityRisk => "ethnicityRisk",
            QuestionId::AgeOver40 => "ageOver40",
            QuestionId::UnexplainedWeightLoss => "unexplainedWeightLoss",
            QuestionId::FamilyHistoryCancer => "familyHistoryCancer",
            QuestionId::TobaccoOrAlcohol => "tobaccoOrAlcohol",
            QuestionId::HighRiskEnvironment => "highRiskEnvironment",
            QuestionId::RegularScreening => "regularScreening",
            QuestionId::Diabetes => "diabetes",
        }
    }

    pub fn group(&self) -> QuestionGroup {
        match self {
            QuestionId::ElevatedIop
            | QuestionId::PoorVision
            | QuestionId::SuddenEyePain
            | QuestionId::FamilyHistoryGlaucoma
            | QuestionId::HalosOrTunnelVision
            | QuestionId::SteroidUse
            | QuestionId::EthnicityRisk
            | QuestionId::AgeOver40 => QuestionGroup::Glaucoma,
            QuestionId::UnexplainedWeightLoss
            | QuestionId::FamilyHistoryCancer
            | QuestionId::TobaccoOrAlcohol
            | QuestionId::HighRiskEnvironment
            | QuestionId::RegularScreening => QuestionGroup::Cancer,
            QuestionId::Diabetes => QuestionGroup::Shared,
        }
    }

    /// Look up a question by its wire key. Returns `None` for unrecognized
    /// keys, which the normalizer silently ignores.
    pub fn from_key(key: &str) -> Option<QuestionId> {
        QuestionId::ALL.into_iter().find(|q| q.key() == key)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for QuestionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::from_key(s).ok_or_else(|| CoreError::UnknownQuestion(s.to_string()))
    }
}

/// One submitted answer before normalization.
///
/// Form posts send booleans, the spreadsheet importer sends whatever the
/// cell held ("Yes", 1, "TRUE", blank). Everything the wire can produce is
/// representable here; the normalizer collapses it to a strict boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawAnswer {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

/// A submitted answer map, keyed by wire key. Missing and unrecognized keys
/// are both permitted.
pub type RawAnswerMap = HashMap<String, RawAnswer>;

/// The canonical, fully-boolean answer record the calculator consumes.
///
/// Every recognized question is present and strictly boolean. An absent
/// answer defaults to `false`, which deliberately scores the same as an
/// explicit "No" (see the screening form's product notes on skipped
/// questions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct AnswerRecord {
    #[serde(rename = "elevatedIOP")]
    pub elevated_iop: bool,
    pub poor_vision: bool,
    pub sudden_eye_pain: bool,
    pub family_history_glaucoma: bool,
    pub halos_or_tunnel_vision: bool,
    pub steroid_use: bool,
    pub ethnicity_risk: bool,
    #[serde(rename = "ageOver40")]
    pub age_over_40: bool,
    pub unexplained_weight_loss: bool,
    pub family_history_cancer: bool,
    pub tobacco_or_alcohol: bool,
    pub high_risk_environment: bool,
    pub regular_screening: bool,
    pub diabetes: bool,
}

impl AnswerRecord {
    pub fn get(&self, question: QuestionId) -> bool {
        match question {
            QuestionId::ElevatedIop => self.elevated_iop,
            QuestionId::PoorVision => self.poor_vision,
            QuestionId::SuddenEyePain => self.sudden_eye_pain,
            QuestionId::FamilyHistoryGlaucoma => self.family_history_glaucoma,
            QuestionId::HalosOrTunnelVision => self.halos_or_tunnel_vision,
            QuestionId::SteroidUse => self.steroid_use,
            QuestionId::EthnicityRisk => self.ethnicity_risk,
            QuestionId::AgeOver40 => self.age_over_40,
            QuestionId::UnexplainedWeightLoss => self.unexplained_weight_loss,
            QuestionId::FamilyHistoryCancer => self.family_history_cancer,
            QuestionId::TobaccoOrAlcohol => self.tobacco_or_alcohol,
            QuestionId::HighRiskEnvironment => self.high_risk_environment,
            QuestionId::RegularScreening => self.regular_screening,
            QuestionId::Diabetes => self.diabetes,
        }
    }

    pub fn set(&mut self, question: QuestionId, value: bool) {
        match question {
            QuestionId::ElevatedIop => self.elevated_iop = value,
            QuestionId::PoorVision => self.poor_vision = value,
            QuestionId::SuddenEyePain => self.sudden_eye_pain = value,
            QuestionId::FamilyHistoryGlaucoma => self.family_history_glaucoma = value,
            QuestionId::HalosOrTunnelVision => self.halos_or_tunnel_vision = value,
            QuestionId::SteroidUse => self.steroid_use = value,
            QuestionId::EthnicityRisk => self.ethnicity_risk = value,
            QuestionId::AgeOver40 => self.age_over_40 = value,
            QuestionId::UnexplainedWeightLoss => self.unexplained_weight_loss = value,
            QuestionId::FamilyHistoryCancer => self.family_history_cancer = value,
            QuestionId::TobaccoOrAlcohol => self.tobacco_or_alcohol = value,
            QuestionId::HighRiskEnvironment => self.high_risk_environment = value,
            QuestionId::RegularScreening => self.regular_screening = value,
            QuestionId::Diabetes => self.diabetes = value,
        }
    }
}
