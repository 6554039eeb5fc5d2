use crate::domain::model::EmailMessage;
use crate::domain::ports::{EmailService, Logger, SmsService};
use crate::utils::error::Result;

/// Sends welcome emails and email/SMS notifications through injected
/// services, reporting every outcome to the logger.
///
/// Each channel follows the same steps: validate the target, send once,
/// log the result. Bad targets are warnings, failed sends are errors.
pub struct NotificationService<E: EmailService, S: SmsService, L: Logger> {
    email_service: E,
    sms_service: S,
    logger: L,
}

impl<E: EmailService, S: SmsService, L: Logger> NotificationService<E, S, L> {
    pub fn new(email_service: E, sms_service: S, logger: L) -> Self {
        Self {
            email_service,
            sms_service,
            logger,
        }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Sends the welcome email. Never fails: transport errors are logged and
    /// reported as `false`.
    pub async fn send_welcome_email(&self, email: &str, user_name: &str) -> bool {
        if !self.email_service.is_valid_email(email) {
            self.logger
                .log_warning(&format!("Invalid email format: {}", email));
            return false;
        }

        let message = EmailMessage::welcome(email, user_name);

        match self
            .email_service
            .send_email(&message.to, &message.subject, &message.body)
            .await
        {
            Ok(true) => {
                self.logger
                    .log_info(&format!("Welcome email sent successfully to {}", email));
                true
            }
            Ok(false) => {
                self.logger
                    .log_error(&format!("Failed to send welcome email to {}", email));
                false
            }
            Err(e) => {
                self.logger.log_error(&format!(
                    "Exception while sending email to {}: {}",
                    email, e
                ));
                false
            }
        }
    }

    /// Tries the email channel, then the SMS channel, and returns whether at
    /// least one of them delivered. An empty target skips its channel.
    ///
    /// Unlike [`send_welcome_email`](Self::send_welcome_email), a transport
    /// error from either service is returned to the caller.
    pub async fn send_notification(
        &self,
        email: &str,
        phone_number: &str,
        message: &str,
    ) -> Result<bool> {
        let mut email_sent = false;
        let mut sms_sent = false;

        if !email.is_empty() {
            if self.email_service.is_valid_email(email) {
                let mail = EmailMessage::notification(email, message);
                email_sent = self
                    .email_service
                    .send_email(&mail.to, &mail.subject, &mail.body)
                    .await?;
                if email_sent {
                    self.logger
                        .log_info(&format!("Email sent successfully to {}", email));
                } else {
                    self.logger
                        .log_error(&format!("Failed to send email to {}", email));
                }
            } else {
                self.logger
                    .log_warning(&format!("Invalid email format: {}", email));
            }
        }

        if !phone_number.is_empty() {
            if self.sms_service.is_valid_phone_number(phone_number) {
                sms_sent = self.sms_service.send_sms(phone_number, message).await?;
                if sms_sent {
                    self.logger
                        .log_info(&format!("SMS sent successfully to {}", phone_number));
                } else {
                    self.logger
                        .log_error(&format!("Failed to send SMS to {}", phone_number));
                }
            } else {
                self.logger
                    .log_warning(&format!("Invalid phone number format: {}", phone_number));
            }
        }

        Ok(email_sent || sms_sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::email::EmailSender;
    use crate::core::sms::SmsSender;
    use crate::domain::model::LogLevel;
    use crate::utils::logger::RecordingLogger;

    fn service(
        email: EmailSender,
        sms: SmsSender,
    ) -> NotificationService<EmailSender, SmsSender, RecordingLogger> {
        NotificationService::new(email, sms, RecordingLogger::new())
    }

    #[tokio::test]
    async fn test_welcome_with_default_senders() {
        let service = service(EmailSender::new(), SmsSender::new());

        assert!(service.send_welcome_email("user@test.com", "John").await);
        assert_eq!(
            service.logger().messages(LogLevel::Info),
            vec!["Welcome email sent successfully to user@test.com".to_string()]
        );
    }

    #[tokio::test]
    async fn test_welcome_with_failing_transport() {
        let service = service(EmailSender::failing(), SmsSender::new());

        assert!(!service.send_welcome_email("user@test.com", "John").await);
        assert_eq!(
            service.logger().messages(LogLevel::Error),
            vec!["Failed to send welcome email to user@test.com".to_string()]
        );
    }

    #[tokio::test]
    async fn test_notification_with_default_senders() {
        let service = service(EmailSender::new(), SmsSender::new());

        let sent = service
            .send_notification("user@test.com", "1234567890", "hi")
            .await
            .unwrap();

        assert!(sent);
        assert_eq!(service.logger().count(LogLevel::Info), 2);
        assert_eq!(service.logger().count(LogLevel::Error), 0);
    }

    #[tokio::test]
    async fn test_notification_both_targets_malformed() {
        let service = service(EmailSender::new(), SmsSender::new());

        let sent = service.send_notification("bad@", "bad", "hi").await.unwrap();

        assert!(!sent);
        assert_eq!(
            service.logger().messages(LogLevel::Warning),
            vec![
                "Invalid email format: bad@".to_string(),
                "Invalid phone number format: bad".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_notification_without_targets_does_nothing() {
        let service = service(EmailSender::new(), SmsSender::new());

        assert!(!service.send_notification("", "", "hi").await.unwrap());
        assert!(service.logger().is_empty());
    }

    #[tokio::test]
    async fn test_notification_sms_succeeds_when_email_transport_fails() {
        let service = service(EmailSender::failing(), SmsSender::new());

        let sent = service
            .send_notification("user@test.com", "1234567890", "hi")
            .await
            .unwrap();

        assert!(sent);
        assert_eq!(
            service.logger().messages(LogLevel::Error),
            vec!["Failed to send email to user@test.com".to_string()]
        );
        assert_eq!(
            service.logger().messages(LogLevel::Info),
            vec!["SMS sent successfully to 1234567890".to_string()]
        );
    }
}
