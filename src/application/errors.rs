use crate::application::ports::user_repository::UserStoreError;

/// Caller-facing error taxonomy. The transport layer translates these onto
/// its protocol; nothing is retried here.
#[derive(thiserror::Error, Debug)]
pub enum IdentityError {
    #[error("user not found")]
    NotFound,
    #[error("user already registered with this email")]
    Conflict,
    #[error("incorrect password")]
    Unauthorized,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<UserStoreError> for IdentityError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateEmail => IdentityError::Conflict,
            UserStoreError::Backend(e) => IdentityError::Internal(e),
        }
    }
}
