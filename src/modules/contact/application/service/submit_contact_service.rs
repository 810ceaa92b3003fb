use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{info, warn};

use crate::contact::application::ports::incoming::use_cases::{
    SubmissionOutcome, SubmitContactError, SubmitContactInput, SubmitContactUseCase,
};
use crate::contact::application::ports::outgoing::email_sender::EmailSender;

// ============================================================================
// Service Implementation
// ============================================================================

/// The submission pipeline: trim and validate the fields, fail fast when the
/// transport is unconfigured, compose the notification mail, attempt one
/// delivery and classify the result.
pub struct SubmitContactService {
    mailer: Option<ContactMailer>,
}

struct ContactMailer {
    sender: Arc<dyn EmailSender + Send + Sync>,
    recipient: String,
}

impl SubmitContactService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, recipient: &str) -> Self {
        Self {
            mailer: Some(ContactMailer {
                sender,
                recipient: recipient.to_string(),
            }),
        }
    }

    /// Built when SMTP credentials are absent; every submission then ends as
    /// `NotConfigured` without touching the network.
    pub fn unconfigured() -> Self {
        Self { mailer: None }
    }
}

/// Syntactic check plus a dotted domain, so bare hosts like "user@box" are
/// rejected even though they are RFC-valid.
fn is_valid_contact_email(email: &str) -> bool {
    if !EmailAddress::is_valid(email) {
        return false;
    }

    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false)
}

fn compose_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "New contact form submission from the portfolio:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Message:\n\
         {message}\n\
         \n\
         ---\n\
         Sent from the portfolio website contact form\n\
         Reply to: {email}\n"
    )
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(
        &self,
        input: SubmitContactInput,
    ) -> Result<SubmissionOutcome, SubmitContactError> {
        let name = input.name.trim();
        let email = input.email.trim();
        let message = input.message.trim();

        if name.is_empty() {
            return Err(SubmitContactError::InvalidInput(
                "Name must not be empty".to_string(),
            ));
        }

        if email.is_empty() {
            return Err(SubmitContactError::InvalidInput(
                "Email must not be empty".to_string(),
            ));
        }

        if message.is_empty() {
            return Err(SubmitContactError::InvalidInput(
                "Message must not be empty".to_string(),
            ));
        }

        if !is_valid_contact_email(email) {
            return Err(SubmitContactError::InvalidInput(
                "Invalid email format".to_string(),
            ));
        }

        let Some(mailer) = &self.mailer else {
            return Err(SubmitContactError::NotConfigured);
        };

        let subject = format!("Portfolio Contact Form - {name}");
        let body = compose_body(name, email, message);

        match mailer
            .sender
            .send_email(&mailer.recipient, &subject, &body)
            .await
        {
            Ok(()) => {
                info!(from = %name, "Contact message delivered");
                Ok(SubmissionOutcome::Delivered)
            }

            Err(err) => {
                // Keep the whole submission in the log so a transport outage
                // does not lose the message.
                warn!(
                    from = %name,
                    reply_to = %email,
                    error = %err,
                    message = %message,
                    "Contact delivery failed"
                );
                Ok(SubmissionOutcome::DeliveryFailed)
            }
        }
    }
}
