//! User directory: the storage seam behind registration and login.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::AppError;

/// Stored user. `email` is always in normalised form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub password_verifier: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub password_verifier: String,
}

/// Trim and lowercase an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, AppError>;

    /// Insert a user. Fails with `EMAIL_TAKEN` if the email is registered.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, AppError>;
}

/// Process-local directory keyed by normalised email.
#[derive(Debug)]
pub struct InMemoryUserDirectory {
    by_email: DashMap<String, UserRecord>,
    email_by_id: DashMap<i64, String>,
    next_id: AtomicI64,
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self {
            by_email: DashMap::new(),
            email_by_id: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self
            .by_email
            .get(&normalize_email(email))
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, AppError> {
        let Some(email) = self.email_by_id.get(&id).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        Ok(self
            .by_email
            .get(&email)
            .map(|entry| entry.value().clone()))
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, AppError> {
        let email = normalize_email(&user.email);

        // The entry guard holds the shard lock, so two concurrent inserts of
        // the same email cannot both succeed.
        match self.by_email.entry(email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "EMAIL_TAKEN",
                "An account with this email already exists".to_string(),
            )),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    email,
                    display_name: user.display_name,
                    password_verifier: user.password_verifier,
                };
                self.email_by_id.insert(record.id, record.email.clone());
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }
}
