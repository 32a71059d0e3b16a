mod core;
mod resources;


pub use crate::core::domain::error::{PanelError, PanelResult, ValidationError};
pub use crate::core::domain::model::{
    client_config::{ClientConfig, DEFAULT_ERROR_EXCERPT_LEN, RateLimitConfig},
    nest::{Egg, EggVariable, Environment, Nest},
    node::{Allocation, Node},
    panel_connection::PanelConnection,
    server::{FeatureLimits, Limits, Server},
    user::User,
};
pub use crate::core::domain::value_object::{ExternalId, PanelHost, PanelToken, PanelUrl, ResourceId};
pub use crate::core::infrastructure::{
    endpoint::API_PREFIX,
    envelope_codec::EnvelopeCodec,
    transport::{HttpTransport, PANEL_MEDIA_TYPE, PanelRequest, RawResponse, Transport},
};
pub use crate::resources::application::request::{
    create_server_request::{AllocationSelection, CreateServerRequest, NewServer},
    create_user_request::CreateUserRequest,
    update_server_request::{UpdateBuildRequest, UpdateDetailsRequest, UpdateStartupRequest},
};

use crate::{
    core::{
        domain::value_object::{validate_host, validate_token},
        infrastructure::api_client::ApiClient,
    },
    resources::application::service::{
        nest_service::NestService, node_service::NodeService,
        provisioning_service::ProvisioningService, server_service::ServerService,
        user_service::UserService,
    },
};
use std::sync::Arc;

/// A Client for the Pterodactyl panel application API
///
/// This client provides a safe, ergonomic interface for:
/// - Users (list, lookup, create, delete)
/// - Servers (lookup, create, suspend, reinstall, update, delete)
/// - Nodes, allocations, nests and eggs (read-only)
///
/// A client holds no mutable state; share it freely between tasks.
///
/// # Examples
///
/// ```no_run
/// use leeca_pterodactyl::{PanelClient, PanelResult};
///
/// #[tokio::main]
/// async fn main() -> PanelResult<()> {
///     let client = PanelClient::builder()
///         .host("panel.example.com")
///         .token("ptla_0123456789abcdefghijklmnopqrstuvwxyz")
///         .secure(true)
///         .build()?;
///
///     client.test_connection().await?;
///     client.suspend_server("order-1234").await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PanelClient {
    api_client: ApiClient,
    config: ClientConfig,
}

/// Builder for PanelClient configuration
#[derive(Debug)]
pub struct PanelClientBuilder {
    host: Option<String>,
    token: Option<String>,
    secure: bool,
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
}

impl Default for PanelClientBuilder {
    fn default() -> Self {
        Self {
            host: None,
            token: None,
            secure: true,
            config: ClientConfig::default(),
            http_client: None,
        }
    }
}

impl PanelClientBuilder {
    /// Panel host without scheme, optionally with port and path prefix.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Application API key.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// `true` (the default) for HTTPS, `false` for plain HTTP.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(rate_limit);
        self
    }

    /// Uses a pre-configured HTTP client (timeouts, proxy, TLS roots).
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Validates the connection parameters and builds the client.
    ///
    /// # Errors
    /// - `PanelError::Validation` if host or token is missing or malformed,
    ///   or the rate limit is zero
    /// - `PanelError::Connection` if the default HTTP client cannot be built
    pub fn build(self) -> PanelResult<PanelClient> {
        let host = self.host.ok_or_else(|| ValidationError::Field {
            field: "host".to_string(),
            message: "Host is required".to_string(),
        })?;
        validate_host(&host)?;

        let token = self.token.ok_or_else(|| ValidationError::Field {
            field: "token".to_string(),
            message: "Token is required".to_string(),
        })?;
        validate_token(&token)?;

        let host = PanelHost::new_unchecked(host);
        let url = PanelUrl::from_host(&host, self.secure)?;
        let connection = PanelConnection::new(host, PanelToken::new_unchecked(token), url);

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| PanelError::Connection(e.to_string()))?,
        };
        let transport = HttpTransport::new(http_client, connection, self.config.rate_limit)?;

        Ok(PanelClient::from_transport(Arc::new(transport), self.config))
    }
}

impl PanelClient {
    /// Creates a new builder for PanelClient configuration
    pub fn builder() -> PanelClientBuilder {
        PanelClientBuilder::default()
    }

    /// Creates a client on top of any `Transport`, e.g. a test double.
    pub fn from_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        let codec = EnvelopeCodec::new(config.error_excerpt_len);
        Self {
            api_client: ApiClient::new(transport, codec),
            config,
        }
    }

    /// Returns the configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Lists nodes to check that the panel is reachable and accepts the token.
    pub async fn test_connection(&self) -> PanelResult<()> {
        NodeService::new(&self.api_client).test_connection().await
    }

    /// Follows the panel's pagination and returns the entries of every page.
    pub async fn nodes(&self) -> PanelResult<Vec<Node>> {
        NodeService::new(&self.api_client).nodes().await
    }

    /// Returns `Ok(None)` if the panel has no such node.
    pub async fn node(&self, node_id: u64) -> PanelResult<Option<Node>> {
        NodeService::new(&self.api_client).node(node_id).await
    }

    /// Lists the allocations of a node that are not assigned to any server,
    /// across every page of the node's allocation list.
    pub async fn free_allocations(&self, node_id: u64) -> PanelResult<Vec<Allocation>> {
        NodeService::new(&self.api_client)
            .free_allocations(node_id)
            .await
    }

    /// Follows the panel's pagination and returns the entries of every page.
    pub async fn users(&self) -> PanelResult<Vec<User>> {
        UserService::new(&self.api_client).users().await
    }

    /// Returns `Ok(None)` if the panel has no such user.
    pub async fn user(&self, id: &ResourceId) -> PanelResult<Option<User>> {
        UserService::new(&self.api_client).user(id).await
    }

    /// Validates and creates a user, returning the panel's record of it.
    ///
    /// Passwords are only scored when `ClientConfig::min_password_score` is set.
    pub async fn create_user(&self, request: &CreateUserRequest) -> PanelResult<User> {
        UserService::new(&self.api_client)
            .create_user(request, self.config.min_password_score)
            .await
    }

    /// Deletes the user with the given external id.
    pub async fn delete_user(&self, external_id: &str) -> PanelResult<()> {
        UserService::new(&self.api_client)
            .delete_user(external_id)
            .await
    }

    /// Follows the panel's pagination and returns the entries of every page.
    pub async fn nests(&self) -> PanelResult<Vec<Nest>> {
        NestService::new(&self.api_client).nests().await
    }

    pub async fn nest(&self, nest_id: u64) -> PanelResult<Option<Nest>> {
        NestService::new(&self.api_client).nest(nest_id).await
    }

    /// Follows the panel's pagination and returns the entries of every page.
    pub async fn eggs(&self, nest_id: u64) -> PanelResult<Vec<Egg>> {
        NestService::new(&self.api_client).eggs(nest_id).await
    }

    pub async fn egg(&self, nest_id: u64, egg_id: u64) -> PanelResult<Option<Egg>> {
        NestService::new(&self.api_client)
            .egg(nest_id, egg_id)
            .await
    }

    /// Returns the default value of every variable the egg declares.
    pub async fn egg_environment(
        &self,
        nest_id: u64,
        egg_id: u64,
    ) -> PanelResult<Option<Environment>> {
        NestService::new(&self.api_client)
            .egg_environment(nest_id, egg_id)
            .await
    }

    /// Follows the panel's pagination and returns the entries of every page.
    pub async fn servers(&self) -> PanelResult<Vec<Server>> {
        ServerService::new(&self.api_client).servers().await
    }

    /// Returns `Ok(None)` if the panel has no such server.
    pub async fn server(&self, id: &ResourceId) -> PanelResult<Option<Server>> {
        ServerService::new(&self.api_client).server(id).await
    }

    /// Translates an external id into the panel's internal server id.
    ///
    /// # Errors
    /// `PanelError::NotFound` if no server carries the external id.
    pub async fn resolve_server_id(&self, external_id: &str) -> PanelResult<u64> {
        ServerService::new(&self.api_client)
            .resolve_server_id(external_id)
            .await
    }

    /// Creates a server from the defaults of its egg.
    pub async fn create_server(&self, server: &NewServer) -> PanelResult<Server> {
        ProvisioningService::new(&self.api_client)
            .create_server(server)
            .await
    }

    pub async fn suspend_server(&self, external_id: &str) -> PanelResult<()> {
        ServerService::new(&self.api_client)
            .suspend_server(external_id)
            .await
    }

    pub async fn unsuspend_server(&self, external_id: &str) -> PanelResult<()> {
        ServerService::new(&self.api_client)
            .unsuspend_server(external_id)
            .await
    }

    pub async fn reinstall_server(&self, external_id: &str) -> PanelResult<()> {
        ServerService::new(&self.api_client)
            .reinstall_server(external_id)
            .await
    }

    pub async fn delete_server(&self, external_id: &str) -> PanelResult<()> {
        ServerService::new(&self.api_client)
            .delete_server(external_id)
            .await
    }

    pub async fn update_server_details(
        &self,
        external_id: &str,
        details: &UpdateDetailsRequest,
    ) -> PanelResult<()> {
        ServerService::new(&self.api_client)
            .update_server_details(external_id, details)
            .await
    }

    pub async fn update_server_build(
        &self,
        external_id: &str,
        build: &UpdateBuildRequest,
    ) -> PanelResult<()> {
        ServerService::new(&self.api_client)
            .update_server_build(external_id, build)
            .await
    }

    /// Resets startup command, image and environment to the egg's defaults and
    /// reinstalls the server. `pack` is only understood by legacy panels.
    pub async fn update_server_startup(
        &self,
        external_id: &str,
        pack: Option<u64>,
    ) -> PanelResult<()> {
        ProvisioningService::new(&self.api_client)
            .update_server_startup(external_id, pack)
            .await
    }
}
