use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentSourceError {
    #[error("Content source unreadable: {0}")]
    Unreadable(String),

    #[error("Content source malformed: {0}")]
    Malformed(String),
}

/// The externally-editable document backing profile/experience/project
/// records. Implementations read the whole document as one unit, so
/// concurrent readers see either the old or the new content, never a mix.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn read(&self) -> Result<Value, ContentSourceError>;
}
