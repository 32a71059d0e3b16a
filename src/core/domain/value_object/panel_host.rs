use crate::core::domain::error::ValidationError;

const MAX_HOSTNAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// A validated panel host, optionally with a port and a path prefix
/// (e.g. `panel.example.com`, `10.0.0.5:8080`, `example.com/panel`).
///
/// The scheme is not part of the host; it is chosen by the secure flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelHost(String);

impl PanelHost {
    /// Creates a validated host.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the host carries a scheme, whitespace,
    /// an invalid label or an invalid port.
    pub fn new(host: impl Into<String>) -> Result<Self, ValidationError> {
        let host = host.into();
        validate_host(&host)?;
        Ok(Self(host))
    }

    /// Creates a new host without validation.
    pub(crate) fn new_unchecked(host: String) -> Self {
        Self(host)
    }

    /// Returns the host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(ValidationError::Format(format!(
            "Label must be between 1 and {} characters",
            MAX_LABEL_LENGTH
        )));
    }

    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ValidationError::Format(
            "Label can only contain alphanumeric characters and hyphens".to_string(),
        ));
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::Format(
            "Label cannot start or end with hyphen".to_string(),
        ));
    }

    Ok(())
}

fn validate_port(port: &str) -> Result<(), ValidationError> {
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(ValidationError::Field {
            field: "port".to_string(),
            message: format!("'{}' is not a valid port", port),
        }),
        Ok(_) => Ok(()),
    }
}

/// Splits `name[:port]` (or `[v6]:port`) into its name and optional port.
fn split_authority(authority: &str) -> Result<(&str, Option<&str>), ValidationError> {
    if authority.starts_with('[') {
        let end = authority.find(']').ok_or_else(|| {
            ValidationError::Format("Unterminated IPv6 literal in host".to_string())
        })?;
        let (name, rest) = authority.split_at(end + 1);
        return match rest.strip_prefix(':') {
            Some(port) => Ok((name, Some(port))),
            None if rest.is_empty() => Ok((name, None)),
            None => Err(ValidationError::Format(format!(
                "Unexpected characters after IPv6 literal: {}",
                rest
            ))),
        };
    }
    Ok(match authority.rsplit_once(':') {
        Some((name, port)) => (name, Some(port)),
        None => (authority, None),
    })
}

/// Validates a panel host.
pub(crate) fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Field {
            field: "host".to_string(),
            message: "Host cannot be empty".to_string(),
        });
    }
    if host.contains("://") {
        return Err(ValidationError::Format(
            "Host must not include a scheme; use the secure flag instead".to_string(),
        ));
    }
    if host.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::Format(
            "Host cannot contain whitespace".to_string(),
        ));
    }

    let authority = host.split('/').next().unwrap_or(host);
    let (name, port) = split_authority(authority)?;

    if name.len() > MAX_HOSTNAME_LENGTH {
        return Err(ValidationError::ConstraintViolation(format!(
            "Host length exceeds maximum of {} characters",
            MAX_HOSTNAME_LENGTH
        )));
    }

    if !name.starts_with('[') {
        for label in name.split('.') {
            validate_label(label)?;
        }
    }

    if let Some(port) = port {
        validate_port(port)?;
    }

    Ok(())
}
