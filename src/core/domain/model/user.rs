//! Domain model for panel users from the `/users` endpoints.

use serde::{Deserialize, Serialize};

/// A panel user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    /// The panel-assigned identifier.
    pub id: u64,
    /// Caller-assigned correlation id.
    pub external_id: Option<String>,
    /// User UUID.
    pub uuid: String,
    /// Login name.
    pub username: String,
    /// E-mail address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Interface language (e.g. `"en"`).
    pub language: String,
    /// Whether the user is a panel administrator.
    pub root_admin: bool,
    /// Whether two-factor authentication is enabled.
    #[serde(rename = "2fa")]
    pub two_factor: bool,
    /// Creation timestamp as sent by the panel.
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the panel.
    pub updated_at: Option<String>,
}
