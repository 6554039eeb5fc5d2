pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::adapters::memory::InMemoryUserRepository;
pub use crate::core::{
    email::EmailSender, notification::NotificationService, sms::SmsSender, user::UserService,
};
pub use domain::model::NewUser;
pub use domain::ports::{EmailService, Logger, SmsService, UserRepository};
pub use utils::error::{NotifyError, Result};
pub use utils::logger::{RecordingLogger, TracingLogger};
