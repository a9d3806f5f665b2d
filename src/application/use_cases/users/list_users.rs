use crate::application::errors::IdentityError;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

pub struct ListUsers<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> ListUsers<'a, R> {
    pub async fn execute(&self) -> Result<Vec<User>, IdentityError> {
        Ok(self.repo.find_all().await?)
    }
}
