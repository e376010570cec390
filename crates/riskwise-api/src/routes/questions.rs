use axum::extract::Path;
use axum::Json;

use riskwise_engine::questions::{all_questions, get_question, Question};

use crate::error::ApiError;

pub async fn list_questions() -> Json<Vec<Question>> {
    Json(all_questions().to_vec())
}

pub async fn get_question_detail(
    Path(key): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let question = get_question(&key)
        .ok_or_else(|| ApiError::NotFound(format!("question not found: {key}")))?;
    Ok(Json(question.clone()))
}
