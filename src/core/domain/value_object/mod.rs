mod panel_host;
mod panel_token;
mod panel_url;
mod panel_user_fields;
mod resource_id;

pub use panel_host::PanelHost;
pub use panel_token::PanelToken;
pub use panel_url::PanelUrl;
pub use resource_id::{ExternalId, ResourceId};

// Re-export validation functions for internal use
pub(crate) use panel_host::validate_host;
pub(crate) use panel_token::validate_token;
pub(crate) use panel_user_fields::{validate_email, validate_password, validate_username};
