use crate::application::errors::IdentityError;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;
use crate::domain::users::validate;
use crate::infrastructure::crypto;

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, req: &CreateUserRequest) -> Result<User, IdentityError> {
        validate::validate_name(&req.name)?;
        validate::validate_email(&req.email)?;
        validate::validate_password(&req.password)?;

        // Pre-check for a friendly Conflict; the store's uniqueness
        // constraint is the real guard against a concurrent create.
        if self.repo.find_by_email(&req.email).await?.is_some() {
            return Err(IdentityError::Conflict);
        }

        let hash = crypto::hash_password(&req.password)?;
        let user = self.repo.create_user(&req.name, &req.email, &hash).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::db::repositories::user_repository_memory::MemoryUserRepository;

    fn request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_and_round_trips_by_email() {
        let repo = MemoryUserRepository::new();
        let uc = CreateUser { repo: &repo };

        let created = uc.execute(&request("ana@x.com")).await.unwrap();
        assert_eq!(created.name, "Ana");
        assert_eq!(created.email, "ana@x.com");
        assert!(created.password_hash.is_none());

        let stored = repo.find_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(stored.id, created.id);
        let hash = stored.password_hash.unwrap();
        assert_ne!(hash, "secret1");
        assert!(crypto::verify_password("secret1", &hash));
        assert!(!crypto::verify_password("secret2", &hash));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = MemoryUserRepository::new();
        let uc = CreateUser { repo: &repo };

        uc.execute(&request("ana@x.com")).await.unwrap();
        let second = uc.execute(&request("ana@x.com")).await;
        assert!(matches!(second, Err(IdentityError::Conflict)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_duplicates_leave_exactly_one_user() {
        let repo = Arc::new(MemoryUserRepository::new());

        let (a, b) = tokio::join!(
            {
                let repo = Arc::clone(&repo);
                async move {
                    let uc = CreateUser { repo: repo.as_ref() };
                    uc.execute(&request("ana@x.com")).await
                }
            },
            {
                let repo = Arc::clone(&repo);
                async move {
                    let uc = CreateUser { repo: repo.as_ref() };
                    uc.execute(&request("ana@x.com")).await
                }
            }
        );

        assert_eq!(
            u8::from(a.is_ok()) + u8::from(b.is_ok()),
            1,
            "exactly one create must win"
        );
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_invalid_input_before_touching_the_store() {
        let repo = MemoryUserRepository::new();
        let uc = CreateUser { repo: &repo };

        let bad_email = uc.execute(&request("not-an-email")).await;
        assert!(matches!(bad_email, Err(IdentityError::Validation(_))));

        let mut req = request("ana@x.com");
        req.name = " ".to_string();
        assert!(matches!(
            uc.execute(&req).await,
            Err(IdentityError::Validation(_))
        ));

        let mut req = request("ana@x.com");
        req.password = String::new();
        assert!(matches!(
            uc.execute(&req).await,
            Err(IdentityError::Validation(_))
        ));

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
