use crate::core::domain::{
    error::ValidationError,
    value_object::{ExternalId, validate_email, validate_password, validate_username},
};
use serde::Serialize;

/// Payload of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    /// Caller-assigned correlation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Interface language; the panel defaults to `"en"` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub root_admin: bool,
    /// Without a password the panel e-mails the user a set-password link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CreateUserRequest {
    /// Creates a request for a regular (non-admin) user without a password.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            external_id: None,
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            language: None,
            root_admin: false,
            password: None,
        }
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn root_admin(mut self, root_admin: bool) -> Self {
        self.root_admin = root_admin;
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Checks the request before it is sent.
    pub(crate) fn validate(
        &self,
        min_password_score: Option<zxcvbn::Score>,
    ) -> Result<(), ValidationError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            if value.trim().is_empty() {
                return Err(ValidationError::Field {
                    field: field.to_string(),
                    message: "Cannot be empty".to_string(),
                });
            }
        }
        if let Some(external_id) = &self.external_id {
            ExternalId::new(external_id.as_str())?;
        }
        if let Some(password) = &self.password {
            validate_password(password, min_password_score)?;
        }
        Ok(())
    }
}
