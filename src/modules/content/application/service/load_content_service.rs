use async_trait::async_trait;
use tracing::warn;

use crate::content::application::domain::entities::ContentSnapshot;
use crate::content::application::domain::validation::ContentValidator;
use crate::content::application::ports::incoming::use_cases::{
    LoadContentError, LoadContentUseCase,
};
use crate::content::application::ports::outgoing::content_source::ContentSource;

// ============================================================================
// Service Implementation
// ============================================================================

/// Owns the reload-with-fallback policy: read the source fresh on every call,
/// validate the shape, and serve the built-in fallback snapshot if the source
/// is unreadable, malformed, or mistyped. A broken content edit therefore
/// degrades the site to minimal content instead of taking the API down.
pub struct LoadContentService<S>
where
    S: ContentSource,
{
    source: S,
}

impl<S> LoadContentService<S>
where
    S: ContentSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> LoadContentUseCase for LoadContentService<S>
where
    S: ContentSource + Send + Sync,
{
    async fn execute(&self) -> Result<ContentSnapshot, LoadContentError> {
        match self.source.read().await {
            Ok(document) => match ContentValidator::validate_document(&document) {
                Ok(snapshot) => return Ok(snapshot),
                Err(err) => {
                    warn!(error = %err, "Content document rejected, serving fallback content");
                }
            },
            Err(err) => {
                warn!(error = %err, "Content source read failed, serving fallback content");
            }
        }

        // The fallback goes out through the same validation gate as real
        // content; if it ever stops passing, the caller gets a classified
        // error rather than an unvalidated response.
        let fallback = ContentSnapshot::fallback();
        let document = serde_json::to_value(&fallback)
            .map_err(|e| LoadContentError::ValidationFailed(e.to_string()))?;
        ContentValidator::validate_document(&document)?;

        Ok(fallback)
    }
}
