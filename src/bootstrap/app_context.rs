use std::sync::Arc;

use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;
use crate::infrastructure::db;
use crate::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use crate::infrastructure::tokens::TokenIssuer;

/// Collaborators are wired by hand; there is no runtime container. The
/// transport layer holds one `AppContext` and hands its parts to use cases.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    token_issuer: TokenIssuer,
}

impl AppServices {
    pub fn new(user_repo: Arc<dyn UserRepository>, token_issuer: TokenIssuer) -> Self {
        Self {
            user_repo,
            token_issuer,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    /// Connect to Postgres, run migrations, and wire the production adapters.
    pub async fn connect(cfg: Config) -> anyhow::Result<Self> {
        let pool = db::connect_pool(&cfg.database_url, cfg.db_max_connections).await?;
        db::migrate(&pool).await?;
        let user_repo: Arc<dyn UserRepository> = Arc::new(SqlxUserRepository::new(pool));
        let token_issuer = TokenIssuer::new(cfg.jwt_secret.clone(), cfg.jwt_expires_secs);
        tracing::info!("identity core connected");
        Ok(Self::new(cfg, AppServices::new(user_repo, token_issuer)))
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.services.token_issuer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::auth::login::{Login, LoginRequest};
    use crate::application::use_cases::users::create_user::{CreateUser, CreateUserRequest};
    use crate::infrastructure::db::repositories::user_repository_memory::MemoryUserRepository;

    fn test_context() -> AppContext {
        let cfg = Config {
            database_url: String::new(),
            db_max_connections: 10,
            jwt_secret: "test-secret".to_string(),
            jwt_expires_secs: 60 * 60 * 24,
            is_production: false,
        };
        let services = AppServices::new(
            Arc::new(MemoryUserRepository::new()),
            TokenIssuer::new(cfg.jwt_secret.clone(), cfg.jwt_expires_secs),
        );
        AppContext::new(cfg, services)
    }

    #[tokio::test]
    async fn wired_context_supports_create_then_login() {
        let ctx = test_context();
        let repo = ctx.user_repo();

        let create = CreateUser {
            repo: repo.as_ref(),
        };
        create
            .execute(&CreateUserRequest {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let login = Login {
            repo: repo.as_ref(),
            tokens: ctx.token_issuer(),
        };
        let auth = login
            .execute(&LoginRequest {
                email: "ana@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert!(!auth.token.is_empty());
    }
}
