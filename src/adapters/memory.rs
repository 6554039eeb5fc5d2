use crate::domain::model::User;
use crate::domain::ports::UserRepository;
use crate::utils::error::{NotifyError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local user store. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<u32, User>>,
    last_id: AtomicU32,
}

impl InMemoryUserRepository {
    /// Empty repository whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<u32, User>> {
        self.users.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<u32, User>> {
        self.users.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no user has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn exists(&self, email: &str) -> bool {
        self.read()
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(email))
    }

    fn save(&self, user: User) -> Result<()> {
        let mut users = self.write();
        if users
            .values()
            .any(|u| u.id != user.id && u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(NotifyError::UserAlreadyExists { email: user.email });
        }
        users.insert(user.id, user);
        Ok(())
    }

    fn get_by_id(&self, id: u32) -> Option<User> {
        self.read().get(&id).cloned()
    }

    fn next_id(&self) -> u32 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}
