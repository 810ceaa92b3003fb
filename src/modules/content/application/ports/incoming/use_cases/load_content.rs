use async_trait::async_trait;

use crate::content::application::domain::entities::ContentSnapshot;
use crate::content::application::domain::validation::ContentValidationError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadContentError {
    #[error("Content failed validation: {0}")]
    ValidationFailed(String),
}

impl From<ContentValidationError> for LoadContentError {
    fn from(err: ContentValidationError) -> Self {
        LoadContentError::ValidationFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadContentUseCase: Send + Sync {
    /// Re-reads the content source and returns the snapshot to serve.
    /// Source failures are absorbed by the fallback; an error here means
    /// even the fallback failed validation.
    async fn execute(&self) -> Result<ContentSnapshot, LoadContentError>;
}
