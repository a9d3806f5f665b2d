use uuid::Uuid;

/// A stored user record. `password_hash` is `None` on every caller-facing
/// read path; only the repository's `find_by_email` carries it, for
/// credential verification.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

impl User {
    /// Copy of this record with the password hash removed.
    pub fn without_hash(mut self) -> Self {
        self.password_hash = None;
        self
    }
}
