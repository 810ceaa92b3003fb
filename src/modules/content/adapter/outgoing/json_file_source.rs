use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::content::application::ports::outgoing::content_source::{
    ContentSource, ContentSourceError,
};

/// Content source backed by a JSON file on disk. The file is read in full on
/// every call, so edits land without a process restart; the content is small
/// and traffic is human-driven, which keeps the re-parse cost irrelevant.
pub struct JsonFileContentSource {
    path: PathBuf,
}

impl JsonFileContentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ContentSource for JsonFileContentSource {
    async fn read(&self) -> Result<Value, ContentSourceError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ContentSourceError::Unreadable(format!("{}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| ContentSourceError::Malformed(e.to_string()))
    }
}
