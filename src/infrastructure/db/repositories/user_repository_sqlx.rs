use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::user_repository::{UserPatch, UserRepository, UserStoreError};
use crate::domain::users::user::User;
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_err(err: sqlx::Error) -> UserStoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return UserStoreError::DuplicateEmail;
        }
    }
    UserStoreError::Backend(err.into())
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = sqlx::query(r#"SELECT id, name, email FROM users"#)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| UserStoreError::Backend(e.into()))?;
        Ok(rows
            .into_iter()
            .map(|r| User {
                id: r.get("id"),
                name: r.get("name"),
                email: r.get("email"),
                password_hash: None,
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(r#"SELECT id, name, email FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::Backend(e.into()))?;
        Ok(row.map(|r| User {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            password_hash: None,
        }))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let row =
            sqlx::query(r#"SELECT id, name, email, password_hash FROM users WHERE email = $1"#)
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| UserStoreError::Backend(e.into()))?;
        Ok(row.map(|r| User {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            password_hash: r.try_get("password_hash").ok(),
        }))
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)
               RETURNING id, name, email"#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_err)?;
        Ok(User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            password_hash: None,
        })
    }

    async fn update_user(
        &self,
        id: Uuid,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"UPDATE users
               SET name = COALESCE($2, name),
                   email = COALESCE($3, email),
                   password_hash = COALESCE($4, password_hash)
               WHERE id = $1
               RETURNING id, name, email"#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.password_hash.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_err)?;
        Ok(row.map(|r| User {
            id: r.get("id"),
            name: r.get("name"),
            email: r.get("email"),
            password_hash: None,
        }))
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, UserStoreError> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| UserStoreError::Backend(e.into()))?;
        Ok(res.rows_affected() > 0)
    }
}
