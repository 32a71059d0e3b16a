use crate::core::domain::error::ValidationError;
use std::fmt;

const MAX_EXTERNAL_ID_LENGTH: usize = 191;

/// A caller-assigned correlation id for a user or server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalId(String);

impl ExternalId {
    /// Creates a validated external id.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the id is empty, longer than the panel
    /// allows, or a dot segment (`.` or `..`).
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_external_id(&id)?;
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a panel resource either by the panel's numeric id or by the
/// caller's external id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// The panel-assigned numeric id.
    Internal(u64),
    /// The caller-assigned correlation id.
    External(ExternalId),
}

impl ResourceId {
    /// Addresses a resource by its panel id.
    #[must_use]
    pub fn internal(id: u64) -> Self {
        ResourceId::Internal(id)
    }

    /// Addresses a resource by its external id.
    ///
    /// # Errors
    /// Returns a `ValidationError` if `id` is not a valid external id.
    pub fn external(id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(ResourceId::External(ExternalId::new(id)?))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Internal(id) => write!(f, "{}", id),
            ResourceId::External(id) => write!(f, "external:{}", id),
        }
    }
}

/// Validates an external id.
///
/// The panel accepts any string of 1 to 191 characters. Ids are percent-encoded
/// when they become a path segment; only `.` and `..` stay unsafe after encoding.
pub(crate) fn validate_external_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::Field {
            field: "external_id".to_string(),
            message: "External id cannot be empty".to_string(),
        });
    }
    if id.chars().count() > MAX_EXTERNAL_ID_LENGTH {
        return Err(ValidationError::Format(format!(
            "External id cannot exceed {} characters",
            MAX_EXTERNAL_ID_LENGTH
        )));
    }
    if id == "." || id == ".." {
        return Err(ValidationError::ConstraintViolation(format!(
            "External id cannot be the dot segment '{}'",
            id
        )));
    }
    Ok(())
}
