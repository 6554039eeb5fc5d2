use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("{message}")]
    InvalidEmail { message: String },

    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("User already exists")]
    UserAlreadyExists { email: String },

    #[error("{channel} transport error: {message}")]
    Transport { channel: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl NotifyError {
    /// Rejected email address.
    pub fn invalid_email(message: impl Into<String>) -> Self {
        Self::InvalidEmail {
            message: message.into(),
        }
    }

    /// Rejected value for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Failure raised by a delivery channel.
    pub fn transport(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            channel: channel.into(),
            message: message.into(),
        }
    }

    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidEmail { .. } | Self::Validation { .. } => {
                format!("Input rejected: {}", self)
            }
            Self::UserAlreadyExists { email } => {
                format!("A user with email {} is already registered", email)
            }
            Self::Transport { channel, message } => {
                format!("Could not reach the {} provider: {}", channel, message)
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => format!("Configuration problem: {}", self),
            Self::IoError(e) => format!("File access failed: {}", e),
        }
    }

    /// Process exit code: 1 for rejected input, 2 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidEmail { .. } | Self::Validation { .. } | Self::UserAlreadyExists { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_plain_messages() {
        let err = NotifyError::invalid_email("Invalid email address");
        assert_eq!(err.to_string(), "Invalid email address");

        let err = NotifyError::validation("name", "Name cannot be empty");
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = NotifyError::UserAlreadyExists {
            email: "a@b.com".to_string(),
        };
        assert_eq!(err.to_string(), "User already exists");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(NotifyError::transport("email", "down").exit_code(), 2);
        assert_eq!(NotifyError::invalid_email("bad").exit_code(), 1);
    }

    #[test]
    fn test_config_load_failures_exit_with_two() {
        let io = NotifyError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(io.exit_code(), 2);
        assert!(io.user_friendly_message().starts_with("File access failed"));

        let toml_err = toml::from_str::<toml::Table>("[broken").unwrap_err();
        let parse = NotifyError::from(toml_err);
        assert_eq!(parse.exit_code(), 2);
        assert!(parse.user_friendly_message().starts_with("Configuration problem"));
    }
}
