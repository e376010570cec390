//! Answer normalization.
//!
//! The single place where "is this a Yes" is decided. Form posts, the
//! spreadsheet importer, and tests all funnel through here; nothing
//! downstream of this module ever sees anything but strict booleans.

use riskwise_core::models::answers::{AnswerRecord, QuestionId, RawAnswer, RawAnswerMap};

use crate::error::EngineError;

/// Coerce one submitted value to a strict boolean.
///
/// Strings are trimmed and lowercased; "yes", "true", and "1" affirm.
/// Numbers affirm only on exactly 1. Everything else, including null and
/// unparseable junk, is `false`.
pub fn answer(value: &RawAnswer) -> bool {
    match value {
        RawAnswer::Bool(b) => *b,
        RawAnswer::Number(n) => *n == 1.0,
        RawAnswer::Text(s) => {
            let s = s.trim().to_ascii_lowercase();
            s == "yes" || s == "true" || s == "1"
        }
        RawAnswer::Null => false,
    }
}

/// Assemble a complete [`AnswerRecord`] from a submitted map.
///
/// Missing keys default to `false` (a skipped question scores like an
/// explicit "No"); unrecognized keys are ignored. Never errors, and
/// normalizing an already-normalized record is a no-op.
pub fn normalize(raw: &RawAnswerMap) -> AnswerRecord {
    let mut record = AnswerRecord::default();
    for (key, value) in raw {
        if let Some(question) = QuestionId::from_key(key) {
            record.set(question, answer(value));
        }
    }
    record
}

/// Normalize a raw JSON payload. A non-object payload (null, array,
/// scalar) is the one structural failure the pipeline surfaces.
pub fn from_json(value: &serde_json::Value) -> Result<AnswerRecord, EngineError> {
    let map = value.as_object().ok_or(EngineError::MissingAnswers)?;
    let mut record = AnswerRecord::default();
    for (key, value) in map {
        if let Some(question) = QuestionId::from_key(key) {
            record.set(question, answer(&raw_from_json(value)));
        }
    }
    Ok(record)
}

fn raw_from_json(value: &serde_json::Value) -> RawAnswer {
    match value {
        serde_json::Value::Bool(b) => RawAnswer::Bool(*b),
        serde_json::Value::Number(n) => n.as_f64().map_or(RawAnswer::Null, RawAnswer::Number),
        serde_json::Value::String(s) => RawAnswer::Text(s.clone()),
        _ => RawAnswer::Null,
    }
}
