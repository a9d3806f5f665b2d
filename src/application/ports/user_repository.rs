use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::users::user::User;

/// Partial update; only the fields that are `Some` are persisted.
/// `password_hash` is already hashed by the time it reaches the store.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum UserStoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("storage failure")]
    Backend(#[source] anyhow::Error),
}

/// The user store. Implementations must enforce email uniqueness at the
/// storage layer itself, so that concurrent creates with one email cannot
/// both succeed regardless of any application-level pre-check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, order unspecified, hashes stripped.
    async fn find_all(&self) -> Result<Vec<User>, UserStoreError>;
    /// Hash stripped.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError>;
    /// Hash present; callers outside the login path must strip it.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, UserStoreError>;
    /// Merges only the provided fields; `None` when the id is absent.
    async fn update_user(&self, id: Uuid, patch: &UserPatch)
    -> Result<Option<User>, UserStoreError>;
    /// True when a row was removed.
    async fn delete_user(&self, id: Uuid) -> Result<bool, UserStoreError>;
}
