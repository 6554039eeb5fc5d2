use crate::core::email::EmailSender;
use crate::core::sms::SmsSender;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub logging: LoggingConfig,
    pub email: ChannelConfig,
    pub sms: ChannelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Make the stub transport report every send as failed.
    pub simulate_failure: bool,
}

impl TomlConfig {
    /// Loads the file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a config string after replacing `${VAR}` references with
    /// environment values. Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: Self = toml::from_str(&processed_content)?;
        Ok(config)
    }

    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Rejects unknown log levels and formats.
    pub fn validate_config(&self) -> Result<()> {
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        Ok(())
    }

    /// Whether logs should be written as JSON.
    pub fn is_json_logging(&self) -> bool {
        self.logging.format.eq_ignore_ascii_case("json")
    }

    /// Configured level for the crate's own log events.
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Email sender honoring `[email] simulate_failure`.
    pub fn email_sender(&self) -> EmailSender {
        EmailSender::with_simulated_failure(self.email.simulate_failure)
    }

    /// SMS sender honoring `[sms] simulate_failure`.
    pub fn sms_sender(&self) -> SmsSender {
        SmsSender::with_simulated_failure(self.sms.simulate_failure)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
