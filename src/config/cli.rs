use crate::utils::error::{NotifyError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-notify")]
#[command(about = "Send welcome emails and email/SMS notifications")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send a welcome email to a new user
    Welcome {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,
    },

    /// Send a message by email and/or SMS
    Notify {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long)]
        message: String,
    },

    /// Check an email address and/or phone number without sending anything
    Validate {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_non_empty_string("config", path)?;
        }

        if let Command::Validate { email: None, phone: None } = &self.command {
            return Err(NotifyError::ConfigError {
                message: "validate needs --email or --phone".to_string(),
            });
        }

        Ok(())
    }
}
