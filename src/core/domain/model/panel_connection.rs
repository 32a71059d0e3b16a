use crate::core::domain::value_object::{PanelHost, PanelToken, PanelUrl};

/// Connection parameters for one panel: where it lives and how to authenticate.
///
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct PanelConnection {
    panel_host: PanelHost,
    panel_token: PanelToken,
    panel_url: PanelUrl,
}

impl PanelConnection {
    pub fn new(panel_host: PanelHost, panel_token: PanelToken, panel_url: PanelUrl) -> Self {
        Self {
            panel_host,
            panel_token,
            panel_url,
        }
    }

    pub fn panel_host(&self) -> &PanelHost {
        &self.panel_host
    }

    pub fn panel_token(&self) -> &PanelToken {
        &self.panel_token
    }

    pub fn panel_url(&self) -> &PanelUrl {
        &self.panel_url
    }

    pub fn is_connection_secure(&self) -> bool {
        self.panel_url.is_secure()
    }
}
