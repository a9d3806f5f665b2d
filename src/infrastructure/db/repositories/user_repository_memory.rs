use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::user_repository::{UserPatch, UserRepository, UserStoreError};
use crate::domain::users::user::User;

/// In-process user store. The single mutex makes check-and-insert atomic, so
/// it upholds the same uniqueness constraint the Postgres index does. Used by
/// tests and embedded callers.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, User>>, UserStoreError> {
        self.users
            .lock()
            .map_err(|_| UserStoreError::Backend(anyhow::anyhow!("user store lock poisoned")))
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self.guard()?;
        Ok(users.values().cloned().map(User::without_hash).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
        let users = self.guard()?;
        Ok(users.get(&id).cloned().map(User::without_hash))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let users = self.guard()?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, UserStoreError> {
        let mut users = self.guard()?;
        if users.values().any(|u| u.email == email) {
            return Err(UserStoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
        };
        users.insert(user.id, user.clone());
        Ok(user.without_hash())
    }

    async fn update_user(
        &self,
        id: Uuid,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserStoreError> {
        let mut users = self.guard()?;
        if let Some(email) = &patch.email {
            if users.values().any(|u| u.email == *email && u.id != id) {
                return Err(UserStoreError::DuplicateEmail);
            }
        }
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            user.name = name.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(hash) = &patch.password_hash {
            user.password_hash = Some(hash.clone());
        }
        Ok(Some(user.clone().without_hash()))
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, UserStoreError> {
        let mut users = self.guard()?;
        Ok(users.remove(&id).is_some())
    }
}
