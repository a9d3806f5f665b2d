use crate::application::errors::IdentityError;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

/// Email lookup for callers outside the login path. The port returns the
/// stored hash for credential checks; this read strips it before the record
/// leaves the core.
pub struct GetUserByEmail<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetUserByEmail<'a, R> {
    pub async fn execute(&self, email: &str) -> Result<User, IdentityError> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(IdentityError::NotFound)?;
        Ok(user.without_hash())
    }
}
