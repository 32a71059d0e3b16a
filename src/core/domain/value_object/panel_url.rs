use crate::core::domain::{error::ValidationError, value_object::PanelHost};

const MAX_URL_LENGTH: usize = 2083; // RFC 7230 standard

/// The validated base URL of a panel, without trailing slashes.
///
/// Built once from a [`PanelHost`] and the secure flag:
/// `panel.example.com//` with `secure = true` becomes `https://panel.example.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelUrl(String);

impl PanelUrl {
    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url.trim_end_matches('/').to_string())
    }

    /// Builds the base URL for `host`, stripping trailing slashes.
    pub fn from_host(host: &PanelHost, secure: bool) -> Result<Self, ValidationError> {
        let scheme = if secure { "https" } else { "http" };
        let url = format!("{}://{}", scheme, host.as_str().trim_end_matches('/'));
        validate_url(&url)?;
        Ok(Self(url))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the URL uses TLS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.0.starts_with("https://")
    }
}

/// Validates an absolute panel base URL.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::ConstraintViolation(
            "Invalid scheme. Must be one of: http, https".to_string(),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::ConstraintViolation(
            "URL must contain a host".to_string(),
        ));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL cannot carry a query or fragment".to_string(),
        ));
    }

    Ok(())
}
