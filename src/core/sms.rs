use crate::domain::model::SmsMessage;
use crate::domain::ports::SmsService;
use crate::utils::error::Result;
use crate::utils::validation::is_valid_phone_number;
use async_trait::async_trait;

/// Default SMS service backed by a stub transport.
#[derive(Debug, Clone, Default)]
pub struct SmsSender {
    simulate_failure: bool,
}

impl SmsSender {
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

    async fn deliver(&self, message: SmsMessage) -> bool {
        if self.simulate_failure {
            tracing::debug!(to = %message.to, "sms transport rejected message");
            return false;
        }

        tracing::debug!(to = %message.to, chars = message.body.chars().count(), "sms delivered");
        true
    }
}

#[async_trait]
impl SmsService for SmsSender {
    fn is_valid_phone_number(&self, phone_number: &str) -> bool {
        is_valid_phone_number(phone_number)
    }

    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<bool> {
        if !self.is_valid_phone_number(phone_number) {
            return Ok(false);
        }

        let message = SmsMessage {
            to: phone_number.to_string(),
            body: message.to_string(),
        };
        Ok(self.deliver(message).await)
    }
}
