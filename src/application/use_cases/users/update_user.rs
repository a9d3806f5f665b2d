use uuid::Uuid;

use crate::application::errors::IdentityError;
use crate::application::ports::user_repository::{UserPatch, UserRepository};
use crate::domain::users::user::User;
use crate::domain::users::validate;
use crate::infrastructure::crypto;

pub struct UpdateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

/// Caller-supplied partial update; absent fields are left untouched. A
/// supplied password is re-hashed before it reaches the store.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl<'a, R: UserRepository + ?Sized> UpdateUser<'a, R> {
    pub async fn execute(&self, id: Uuid, req: &UpdateUserRequest) -> Result<User, IdentityError> {
        if let Some(name) = &req.name {
            validate::validate_name(name)?;
        }
        if let Some(email) = &req.email {
            validate::validate_email(email)?;
        }
        if let Some(password) = &req.password {
            validate::validate_password(password)?;
        }

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound)?;

        let password_hash = match &req.password {
            Some(password) => Some(crypto::hash_password(password)?),
            None => None,
        };
        let patch = UserPatch {
            name: req.name.clone(),
            email: req.email.clone(),
            password_hash,
        };

        let updated = self
            .repo
            .update_user(id, &patch)
            .await?
            .ok_or(IdentityError::NotFound)?;
        Ok(updated)
    }
}
