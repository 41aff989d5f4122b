use thiserror::Error;

/// Failure to persist the onboarding flag.
///
/// The in-memory flag keeps its new value; the stored payload keeps the
/// previous one.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode persisted flags: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write persisted flags: {0:#}")]
    Write(anyhow::Error),
}
