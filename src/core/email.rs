use crate::domain::model::EmailMessage;
use crate::domain::ports::EmailService;
use crate::utils::error::{NotifyError, Result};
use crate::utils::validation::is_valid_email;
use async_trait::async_trait;

/// Default email service. There is no real transport: a message to a valid
/// address is reported as delivered unless the sender was built with
/// [`EmailSender::failing`].
#[derive(Debug, Clone, Default)]
pub struct EmailSender {
    simulate_failure: bool,
}

impl EmailSender {
    /// A sender that delivers every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose transport rejects every message.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
        }
    }

    /// Builds a sender from the `simulate_failure` config flag.
    pub fn with_simulated_failure(simulate_failure: bool) -> Self {
        Self { simulate_failure }
    }

    async fn deliver(&self, message: EmailMessage) -> bool {
        if self.simulate_failure {
            tracing::debug!(to = %message.to, "email transport rejected message");
            return false;
        }

        tracing::debug!(
            to = %message.to,
            subject = %message.subject,
            bytes = message.body.len(),
            "email delivered"
        );
        true
    }
}

#[async_trait]
impl EmailService for EmailSender {
    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool> {
        if !self.is_valid_email(to) {
            return Ok(false);
        }

        let message = EmailMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };
        Ok(self.deliver(message).await)
    }

    fn send_welcome_email(&self, email: &str, name: &str) -> Result<()> {
        if !self.is_valid_email(email) {
            return Err(NotifyError::invalid_email("Invalid email address"));
        }

        if name.trim().is_empty() {
            return Err(NotifyError::validation("name", "Name cannot be empty"));
        }

        Ok(())
    }
}
