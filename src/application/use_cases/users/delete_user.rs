use uuid::Uuid;

use crate::application::errors::IdentityError;
use crate::application::ports::user_repository::UserRepository;

pub struct DeleteUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> DeleteUser<'a, R> {
    /// Hard delete. A user that exists at the pre-check but is gone by the
    /// time the store deletes it surfaces as an internal error, never as a
    /// silent false.
    pub async fn execute(&self, id: Uuid) -> Result<bool, IdentityError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound)?;

        let deleted = self.repo.delete_user(id).await?;
        if !deleted {
            tracing::warn!(user_id = %id, "user disappeared between existence check and delete");
            return Err(IdentityError::Internal(anyhow::anyhow!(
                "user vanished during delete"
            )));
        }
        Ok(true)
    }
}
