use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The answers payload was absent or not a JSON object. Distinct from
    /// an object with missing keys, which is tolerated.
    #[error("answers payload is missing or not an object")]
    MissingAnswers,
}
