use crate::core::domain::error::ValidationError;
use std::fmt;

const MIN_TOKEN_LENGTH: usize = 16;
const MAX_TOKEN_LENGTH: usize = 255;

/// A panel application API key, sent as a bearer token.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct PanelToken(String);

impl PanelToken {
    /// Creates a validated token.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        validate_token(&token)?;
        Ok(Self(token))
    }

    /// Creates a new token without validation.
    pub(crate) fn new_unchecked(token: String) -> Self {
        Self(token)
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the token as the value of an `Authorization` header.
    #[must_use]
    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for PanelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PanelToken").field(&"<redacted>").finish()
    }
}

/// Validates the format of an API key.
pub(crate) fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "token".to_string(),
            message: "Token cannot be empty".to_string(),
        });
    }
    if token.len() < MIN_TOKEN_LENGTH || token.len() > MAX_TOKEN_LENGTH {
        return Err(ValidationError::Format(format!(
            "Token length must be between {} and {} characters (got {})",
            MIN_TOKEN_LENGTH,
            MAX_TOKEN_LENGTH,
            token.len()
        )));
    }
    // Must be usable verbatim as a header value.
    if !token.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::Format(
            "Token can only contain printable ASCII characters".to_string(),
        ));
    }
    Ok(())
}
