use crate::application::errors::IdentityError;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;
use crate::infrastructure::crypto;
use crate::infrastructure::tokens::TokenIssuer;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
    pub tokens: &'a TokenIssuer,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Identity claims paired with a freshly issued session token. Ephemeral;
/// nothing is persisted on login.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: User,
    pub token: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> Result<AuthResult, IdentityError> {
        let user = self
            .repo
            .find_by_email(&req.email)
            .await?
            .ok_or(IdentityError::NotFound)?;

        let hash = user.password_hash.as_deref().unwrap_or_default();
        if !crypto::verify_password(&req.password, hash) {
            tracing::warn!(email = %req.email, "failed login attempt");
            return Err(IdentityError::Unauthorized);
        }

        let token = self.tokens.issue(user.id, &user.name)?;
        Ok(AuthResult {
            user: user.without_hash(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::users::create_user::{CreateUser, CreateUserRequest};
    use crate::infrastructure::db::repositories::user_repository_memory::MemoryUserRepository;
    use crate::infrastructure::tokens::Claims;
    use jsonwebtoken::{DecodingKey, Validation};

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", 60 * 60 * 24)
    }

    async fn seed(repo: &MemoryUserRepository) -> User {
        let uc = CreateUser { repo };
        uc.execute(&CreateUserRequest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn correct_credentials_yield_a_signed_token() {
        let repo = MemoryUserRepository::new();
        let created = seed(&repo).await;
        let tokens = issuer();

        let uc = Login {
            repo: &repo,
            tokens: &tokens,
        };
        let auth = uc
            .execute(&LoginRequest {
                email: "ana@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(auth.user.id, created.id);
        assert!(auth.user.password_hash.is_none());

        let data = jsonwebtoken::decode::<Claims>(
            &auth.token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.sub, created.id.to_string());
        assert_eq!(data.claims.name, "Ana");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let repo = MemoryUserRepository::new();
        seed(&repo).await;
        let tokens = issuer();

        let uc = Login {
            repo: &repo,
            tokens: &tokens,
        };
        let denied = uc
            .execute(&LoginRequest {
                email: "ana@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(denied, Err(IdentityError::Unauthorized)));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let repo = MemoryUserRepository::new();
        let tokens = issuer();

        let uc = Login {
            repo: &repo,
            tokens: &tokens,
        };
        let missing = uc
            .execute(&LoginRequest {
                email: "nobody@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;
        assert!(matches!(missing, Err(IdentityError::NotFound)));
    }
}
