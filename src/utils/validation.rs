use crate::utils::error::{NotifyError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Dot-atom on both sides of the `@`: runs of atext separated by single dots.
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<local>[A-Za-z0-9!#$%\&'*+/=?^_`{|}\~\-]+(?:\.[A-Za-z0-9!#$%\&'*+/=?^_`{|}\~\-]+)*)@(?P<domain>[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*)$",
    )
    .expect("address pattern is a valid regex")
});

pub const PHONE_NUMBER_LEN: usize = 10;

/// A parsed mail address split into its local part and domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local_part: String,
    domain: String,
}

impl EmailAddress {
    /// Parses an address. Surrounding whitespace is ignored, anything
    /// outside the dot-atom grammar is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NotifyError::invalid_email("Email address cannot be empty"));
        }

        let caps = ADDRESS_RE.captures(trimmed).ok_or_else(|| {
            NotifyError::invalid_email(format!("'{}' is not a valid email address", trimmed))
        })?;

        Ok(Self {
            local_part: caps["local"].to_string(),
            domain: caps["domain"].to_string(),
        })
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

/// True when `input` parses as an address whose canonical form matches the
/// trimmed input, ignoring ASCII case.
pub fn is_valid_email(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    match EmailAddress::parse(trimmed) {
        Ok(address) => address.to_string().eq_ignore_ascii_case(trimmed),
        Err(_) => false,
    }
}

/// A ten digit phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(NotifyError::validation(
                "phone_number",
                "Phone number cannot be empty",
            ));
        }

        if input.len() != PHONE_NUMBER_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NotifyError::validation(
                "phone_number",
                format!("Phone number must be exactly {} digits", PHONE_NUMBER_LEN),
            ));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_phone_number(input: &str) -> bool {
    PhoneNumber::parse(input).is_ok()
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NotifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        return Err(NotifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
