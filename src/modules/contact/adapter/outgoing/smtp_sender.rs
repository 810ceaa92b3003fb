use std::env;
use std::time::Duration;

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::contact::application::ports::outgoing::email_sender::EmailSender;

/// Bound on connect/handshake/send so a wedged relay cannot hold a request
/// open indefinitely.
const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

//
// ──────────────────────────────────────────────────────────
// Configuration
// ──────────────────────────────────────────────────────────
//

/// SMTP relay settings. `from_env` yields `None` when the credentials are
/// missing; there is deliberately no built-in fallback credential, so an
/// undeployed secret disables the contact form instead of leaking one.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub to_email: String,
}

impl MailConfig {
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let username = lookup("SMTP_USERNAME").filter(|v| !v.is_empty())?;
        let password = lookup("SMTP_PASSWORD").filter(|v| !v.is_empty())?;

        let host = lookup("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string());
        let port = lookup("SMTP_PORT")
            .unwrap_or_else(|| "587".to_string())
            .parse::<u16>()
            .unwrap_or_else(|_| panic!("Invalid SMTP_PORT value"));

        // Sender identity and recipient both default to the account itself,
        // which is how the owner's mailbox receives its own notifications.
        let from_email = lookup("SMTP_FROM_EMAIL").unwrap_or_else(|| username.clone());
        let to_email = lookup("SMTP_TO_EMAIL").unwrap_or_else(|| username.clone());

        Some(Self {
            host,
            port,
            username,
            password,
            from_email,
            to_email,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Transport seam
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// STARTTLS submission (port 587 by default) with explicit credentials
    /// and a bounded timeout.
    pub fn new(config: &MailConfig) -> Result<Self, lettre::transport::smtp::Error> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(creds)
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            mailer: Box::new(transport),
            from_email: config.from_email.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await?;
        Ok(())
    }
}
