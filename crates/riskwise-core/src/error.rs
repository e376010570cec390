use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown question key: {0}")]
    UnknownQuestion(String),
}
