use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Types
// ──────────────────────────────────────────────────────────
//

/// A single contact-form submission. Lives for one pipeline invocation and
/// is discarded once the outcome is known; nothing is persisted.
#[derive(Debug, Clone)]
pub struct SubmitContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Terminal states of a dispatch attempt. `DeliveryFailed` is an outcome,
/// not an error: the adapter decides per policy whether the submitter sees
/// it or gets a soft-success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    DeliveryFailed,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Mail transport is not configured")]
    NotConfigured,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    /// Validates the submission and makes a single best-effort delivery
    /// attempt. No retries.
    async fn execute(
        &self,
        input: SubmitContactInput,
    ) -> Result<SubmissionOutcome, SubmitContactError>;
}
