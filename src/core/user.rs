use crate::domain::model::{NewUser, User};
use crate::domain::ports::{EmailService, UserRepository};
use crate::utils::error::{NotifyError, Result};
use chrono::Utc;

/// Registers users and greets them by email.
pub struct UserService<R: UserRepository, E: EmailService> {
    repository: R,
    email_service: E,
}

impl<R: UserRepository, E: EmailService> UserService<R, E> {
    pub fn new(repository: R, email_service: E) -> Self {
        Self {
            repository,
            email_service,
        }
    }

    /// Validates `new_user`, checks its welcome email, then stores it.
    ///
    /// A blank email is rejected before either collaborator is consulted.
    /// Nothing is stored when any check fails.
    pub fn create_user(&self, new_user: NewUser) -> Result<User> {
        let NewUser { name, email } = new_user;

        if email.trim().is_empty() || !self.email_service.is_valid_email(&email) {
            return Err(NotifyError::invalid_email("Invalid email format"));
        }

        if name.trim().is_empty() {
            return Err(NotifyError::validation("name", "Name cannot be empty"));
        }

        if self.repository.exists(&email) {
            return Err(NotifyError::UserAlreadyExists { email });
        }

        self.email_service.send_welcome_email(&email, &name)?;

        let user = User {
            id: self.repository.next_id(),
            name,
            email,
            phone_number: None,
            created_at: Utc::now(),
        };

        self.repository.save(user.clone())?;
        tracing::info!(user_id = user.id, email = %user.email, "user created");

        Ok(user)
    }

    /// Looks a stored user up by id.
    pub fn get_user(&self, id: u32) -> Option<User> {
        self.repository.get_by_id(id)
    }
}
