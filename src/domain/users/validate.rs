use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::errors::IdentityError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

pub fn validate_name(name: &str) -> Result<(), IdentityError> {
    if name.trim().is_empty() {
        return Err(IdentityError::Validation("name must not be empty".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), IdentityError> {
    if !EMAIL_RE.is_match(email) {
        return Err(IdentityError::Validation(format!(
            "invalid email address: {}",
            email
        )));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), IdentityError> {
    if password.is_empty() {
        return Err(IdentityError::Validation(
            "password must not be empty".into(),
        ));
    }
    Ok(())
}
