use async_trait::async_trait;

/// Outbound mail transport used to relay contact submissions to the site
/// owner. The error string carries the raw transport failure for logging.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
