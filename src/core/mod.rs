pub mod email;
pub mod notification;
pub mod sms;
pub mod user;

pub use crate::domain::model::{EmailMessage, LogLevel, LogRecord, NewUser, SmsMessage, User};
pub use crate::domain::ports::{EmailService, Logger, SmsService, UserRepository};
pub use crate::utils::error::Result;
