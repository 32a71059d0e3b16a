use thiserror::Error;

/// The main error type for Pterodactyl panel operations.
///
/// Each variant maps to one failure class of the application API: transport
/// problems, invalid input, undecodable bodies, unexpected status codes and
/// failed dependent lookups. A resource that simply does not exist is *not* an
/// error; lookups return `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Represents failures below HTTP: connection refused, DNS, TLS, body read
    ///
    /// # Fields
    /// * `0` - A description of what went wrong on the wire
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },

    /// The panel answered with a body that is not the expected envelope
    ///
    /// # Fields
    /// * `context` - What was being decoded (e.g. `"server"`)
    /// * `message` - The decoder's message
    #[error("Decode error ({context}): {message}")]
    Decode { context: String, message: String },

    /// The panel answered with a status code the operation does not accept
    ///
    /// # Fields
    /// * `operation` - The operation that was attempted (e.g. `"suspend server"`)
    /// * `target` - The resource the operation addressed
    /// * `status` - The received HTTP status code
    /// * `body` - An excerpt of the response body
    #[error("{operation} failed for {target} with status code {status}: {body}")]
    Api {
        operation: String,
        target: String,
        status: u16,
        body: String,
    },

    /// A lookup an operation depends on came back empty
    ///
    /// # Fields
    /// * `resource` - The kind of resource (e.g. `"server"`)
    /// * `id` - The identifier that did not resolve
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Server creation was rejected because no node or allocation fits it
    #[error("Could not find any nodes satisfying the request: {body}")]
    NoSatisfyingNode { body: String },

    /// The panel reported success but the payload is unusable
    #[error("Anomalous response from panel: {0}")]
    AnomalousResponse(String),
}

impl PanelError {
    /// Returns the HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PanelError::Api { status, .. } => Some(*status),
            PanelError::NoSatisfyingNode { .. } => Some(400),
            _ => None,
        }
    }

    /// Returns true for errors raised because a dependent lookup was empty.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PanelError::NotFound { .. })
    }
}

impl From<ValidationError> for PanelError {
    fn from(error: ValidationError) -> Self {
        PanelError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a PanelError
pub type PanelResult<T> = Result<T, PanelError>;
