use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub exp: usize,
}

/// Signs session tokens with a process-wide HS256 secret. Tokens carry the
/// user's id and display name and expire after a fixed window; there is no
/// refresh or revocation. Decoding belongs to the transport guard, not here.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    expires_secs: i64,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, expires_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_secs,
        }
    }

    pub fn issue(&self, user_id: Uuid, name: &str) -> anyhow::Result<String> {
        let now = chrono::Utc::now().timestamp();
        let exp = now
            .checked_add(self.expires_secs)
            .and_then(|ts| usize::try_from(ts).ok())
            .ok_or_else(|| anyhow::anyhow!("token expiry out of range"))?;
        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            exp,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }
}
