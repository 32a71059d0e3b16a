//! Validators for the fields of a new panel user.

use crate::core::domain::error::ValidationError;
use zxcvbn::zxcvbn;

const MAX_FIELD_LENGTH: usize = 191;

/// Validates a username the way the panel's username rule does:
/// starts and ends with an alphanumeric character, `_ . -` allowed inside.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.len() < 3 || username.len() > MAX_FIELD_LENGTH {
        return Err(ValidationError::Format(format!(
            "Username length must be between 3 and {} characters (got {})",
            MAX_FIELD_LENGTH,
            username.len()
        )));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.';
    if !username.chars().all(allowed) {
        return Err(ValidationError::Format(
            "Username contains invalid characters. Allowed: alphanumeric, -, _, .".to_string(),
        ));
    }
    let edge_ok = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    if !edge_ok(username.chars().next()) || !edge_ok(username.chars().last()) {
        return Err(ValidationError::Format(
            "Username must start and end with an alphanumeric character".to_string(),
        ));
    }
    Ok(())
}

/// Validates the shape of an e-mail address.
///
/// Single-label domains such as `localhost` are accepted.
pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Field {
            field: "email".to_string(),
            message: "Email cannot be empty".to_string(),
        });
    }
    if email.len() > MAX_FIELD_LENGTH || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(
            "Email is too long or contains whitespace".to_string(),
        ));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err(ValidationError::Format(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}

/// Validates a password according to the configuration.
pub(crate) fn validate_password(
    password: &str,
    min_score: Option<zxcvbn::Score>,
) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    if password.len() < 8 {
        return Err(ValidationError::Format(
            "Password must be at least 8 characters long".to_string(),
        ));
    }
    if password.len() > 128 {
        return Err(ValidationError::Format(
            "Password cannot exceed 128 characters".to_string(),
        ));
    }
    if let Some(min_score) = min_score {
        let entropy = zxcvbn(password, &[]);
        if entropy.score() < min_score {
            return Err(ValidationError::ConstraintViolation(
                "Password is too weak (increase complexity)".to_string(),
            ));
        }
    }
    Ok(())
}
