use crate::domain::model::User;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Email delivery. `send_email` returns `Ok(false)` for a recipient that
/// fails validation; `Err` is reserved for transport failures.
#[async_trait]
pub trait EmailService: Send + Sync {
    fn is_valid_email(&self, email: &str) -> bool;

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool>;

    /// Checks the inputs of a welcome email without delivering anything.
    fn send_welcome_email(&self, email: &str, name: &str) -> Result<()>;
}

#[async_trait]
pub trait SmsService: Send + Sync {
    fn is_valid_phone_number(&self, phone_number: &str) -> bool;

    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<bool>;
}

/// Leveled text sink. Calls never fail.
pub trait Logger: Send + Sync {
    fn log_info(&self, message: &str);
    fn log_warning(&self, message: &str);
    fn log_error(&self, message: &str);
}

pub trait UserRepository: Send + Sync {
    fn exists(&self, email: &str) -> bool;
    fn save(&self, user: User) -> Result<()>;
    fn get_by_id(&self, id: u32) -> Option<User>;
    fn next_id(&self) -> u32;
}
