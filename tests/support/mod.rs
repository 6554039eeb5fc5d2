#![allow(dead_code)]

use async_trait::async_trait;
use small_notify::domain::model::User;
use small_notify::{EmailService, NotifyError, Result, SmsService, UserRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum SendBehavior {
    Deliver,
    Reject,
    Error(String),
}

impl SendBehavior {
    fn outcome(&self, channel: &str) -> Result<bool> {
        match self {
            SendBehavior::Deliver => Ok(true),
            SendBehavior::Reject => Ok(false),
            SendBehavior::Error(message) => Err(NotifyError::transport(channel, message.clone())),
        }
    }
}

#[derive(Debug, Default)]
struct EmailCalls {
    validated: Vec<String>,
    sent: Vec<(String, String, String)>,
    welcomed: Vec<(String, String)>,
}

/// Email double: answers `is_valid_email` with a fixed value and records
/// every call.
#[derive(Clone)]
pub struct MockEmailService {
    valid: bool,
    behavior: SendBehavior,
    welcome_error: Option<String>,
    calls: Arc<Mutex<EmailCalls>>,
}

impl MockEmailService {
    pub fn new(valid: bool, behavior: SendBehavior) -> Self {
        Self {
            valid,
            behavior,
            welcome_error: None,
            calls: Arc::new(Mutex::new(EmailCalls::default())),
        }
    }

    /// Makes `send_welcome_email` fail with a name validation error.
    pub fn with_welcome_error(mut self, message: &str) -> Self {
        self.welcome_error = Some(message.to_string());
        self
    }

    pub fn validated(&self) -> Vec<String> {
        self.calls.lock().unwrap().validated.clone()
    }

    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().sent.clone()
    }

    pub fn welcomed(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().welcomed.clone()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    fn is_valid_email(&self, email: &str) -> bool {
        self.calls.lock().unwrap().validated.push(email.to_string());
        self.valid
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool> {
        self.calls
            .lock()
            .unwrap()
            .sent
            .push((to.to_string(), subject.to_string(), body.to_string()));
        self.behavior.outcome("email")
    }

    fn send_welcome_email(&self, email: &str, name: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .welcomed
            .push((email.to_string(), name.to_string()));
        match &self.welcome_error {
            Some(message) => Err(NotifyError::validation("name", message.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
struct SmsCalls {
    validated: Vec<String>,
    sent: Vec<(String, String)>,
}

#[derive(Clone)]
pub struct MockSmsService {
    valid: bool,
    behavior: SendBehavior,
    calls: Arc<Mutex<SmsCalls>>,
}

impl MockSmsService {
    pub fn new(valid: bool, behavior: SendBehavior) -> Self {
        Self {
            valid,
            behavior,
            calls: Arc::new(Mutex::new(SmsCalls::default())),
        }
    }

    pub fn validated(&self) -> Vec<String> {
        self.calls.lock().unwrap().validated.clone()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().sent.clone()
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    fn is_valid_phone_number(&self, phone_number: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .validated
            .push(phone_number.to_string());
        self.valid
    }

    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<bool> {
        self.calls
            .lock()
            .unwrap()
            .sent
            .push((phone_number.to_string(), message.to_string()));
        self.behavior.outcome("sms")
    }
}

#[derive(Debug, Default)]
struct RepositoryState {
    exists_calls: Vec<String>,
    saved: Vec<User>,
    stored: HashMap<u32, User>,
    get_calls: Vec<u32>,
}

/// Repository double with a fixed `exists` answer.
#[derive(Clone)]
pub struct MockUserRepository {
    exists: bool,
    state: Arc<Mutex<RepositoryState>>,
}

impl MockUserRepository {
    pub fn new(exists: bool) -> Self {
        Self {
            exists,
            state: Arc::new(Mutex::new(RepositoryState::default())),
        }
    }

    pub fn with_user(self, user: User) -> Self {
        self.state.lock().unwrap().stored.insert(user.id, user);
        self
    }

    pub fn exists_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().exists_calls.clone()
    }

    pub fn saved(&self) -> Vec<User> {
        self.state.lock().unwrap().saved.clone()
    }

    pub fn get_calls(&self) -> Vec<u32> {
        self.state.lock().unwrap().get_calls.clone()
    }
}

impl UserRepository for MockUserRepository {
    fn exists(&self, email: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .exists_calls
            .push(email.to_string());
        self.exists
    }

    fn save(&self, user: User) -> Result<()> {
        self.state.lock().unwrap().saved.push(user);
        Ok(())
    }

    fn get_by_id(&self, id: u32) -> Option<User> {
        let mut state = self.state.lock().unwrap();
        state.get_calls.push(id);
        state.stored.get(&id).cloned()
    }

    fn next_id(&self) -> u32 {
        self.state.lock().unwrap().saved.len() as u32 + 1
    }
}
