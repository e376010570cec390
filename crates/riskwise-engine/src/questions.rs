//! The questionnaire catalog.
//!
//! Public schema data the frontend renders the screening form from. Order
//! matches [`QuestionId::ALL`]; prompts are the wording shown to the user.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use riskwise_core::models::answers::{QuestionGroup, QuestionId};

/// One questionnaire item as shown on the screening form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub group: QuestionGroup,
    pub prompt: String,
}

fn prompt(question: QuestionId) -> &'static str {
    match question {
        QuestionId::ElevatedIop => {
            "Have you been told your intraocular pressure (IOP) is elevated?"
        }
        QuestionId::PoorVision => "Has your vision worsened noticeably in the past year?",
        QuestionId::SuddenEyePain => "Have you experienced sudden eye pain or redness?",
        QuestionId::FamilyHistoryGlaucoma => {
            "Has a parent or sibling been diagnosed with glaucoma?"
        }
        QuestionId::HalosOrTunnelVision => {
            "Do you see halos around lights, or has your side vision narrowed?"
        }
        QuestionId::SteroidUse => "Do you use steroid medication regularly (any form)?",
        QuestionId::EthnicityRisk => {
            "Is your ethnic background associated with elevated glaucoma risk?"
        }
        QuestionId::AgeOver40 => "Are you over 40 years old?",
        QuestionId::UnexplainedWeightLoss => {
            "Have you lost weight recently without trying to?"
        }
        QuestionId::FamilyHistoryCancer => {
            "Has a close relative been diagnosed with cancer?"
        }
        QuestionId::TobaccoOrAlcohol => "Do you use tobacco or drink alcohol regularly?",
        QuestionId::HighRiskEnvironment => {
            "Does your work or home environment expose you to known carcinogens?"
        }
        QuestionId::RegularScreening => {
            "Do you attend regular cancer screening appointments?"
        }
        QuestionId::Diabetes => "Have you been diagnosed with diabetes?",
    }
}

/// The full catalog, in form display order.
pub fn all_questions() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        QuestionId::ALL
            .into_iter()
            .map(|id| Question {
                id,
                group: id.group(),
                prompt: prompt(id).to_string(),
            })
            .collect()
    });
    &QUESTIONS
}

/// Look up one catalog entry by its wire key.
pub fn get_question(key: &str) -> Option<&'static Question> {
    let id = QuestionId::from_key(key)?;
    all_questions().iter().find(|q| q.id == id)
}
