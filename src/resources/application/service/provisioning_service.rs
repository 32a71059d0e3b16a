//! Operations that read related resources before they write.
//!
//! Each step feeds the next one, so steps run strictly in order and the first
//! failure aborts the operation.

use crate::{
    core::{
        domain::{
            error::{PanelError, PanelResult},
            model::{
                nest::{Egg, Environment},
                server::Server,
            },
        },
        infrastructure::{
            api_client::{ApiClient, STATUS_BAD_REQUEST, STATUS_CREATED, STATUS_OK},
            endpoint::Endpoint,
        },
    },
    resources::application::{
        request::{
            create_server_request::{CreateServerRequest, NewServer},
            update_server_request::UpdateStartupRequest,
        },
        service::{nest_service::NestService, server_service::ServerService},
    },
};
use reqwest::Method;
use tracing::{info, warn};

/// Server creation and startup reset.
pub struct ProvisioningService<'a> {
    api: &'a ApiClient,
    servers: ServerService<'a>,
    nests: NestService<'a>,
}

impl<'a> ProvisioningService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            servers: ServerService::new(api),
            nests: NestService::new(api),
        }
    }

    /// Creates a server from `server` and the defaults of its egg.
    ///
    /// Requests, in order: the egg, the egg's variables, `POST /servers`.
    ///
    /// # Errors
    /// - `PanelError::NotFound` if the egg or its variables cannot be fetched
    /// - `PanelError::NoSatisfyingNode` if the panel answers `400`
    /// - `PanelError::Api` for any other status than `201`
    /// - `PanelError::AnomalousResponse` if the `201` body is a zero-valued server
    pub async fn create_server(&self, server: &NewServer) -> PanelResult<Server> {
        server.validate()?;

        let egg = self.required_egg(server.nest, server.egg).await?;
        let environment = self.required_environment(server.nest, server.egg).await?;
        let payload = CreateServerRequest::assemble(server, &egg, environment);

        let response = self
            .api
            .send_json(Method::POST, Endpoint::Servers, "server", &payload)
            .await?;

        match response.status {
            STATUS_CREATED => {}
            STATUS_BAD_REQUEST => {
                warn!(name = %server.name, "no node satisfies the server request");
                return Err(PanelError::NoSatisfyingNode {
                    body: self.api.codec().excerpt(&response.body),
                });
            }
            _ => return Err(self.api.failure("create server", &server.name, &response)),
        }

        let created: Server = self.api.codec().decode_item("server", &response.body)?;
        if created.is_zero_valued() {
            return Err(PanelError::AnomalousResponse(format!(
                "server creation returned an empty server: {}",
                self.api.codec().excerpt(&response.body)
            )));
        }

        info!(server_id = created.id, uuid = %created.uuid, "server created");
        Ok(created)
    }

    /// Resets a server's startup command, image and environment to its egg's
    /// defaults, then reinstalls it so the change reaches the container.
    ///
    /// Requests, in order: the server by external id, its egg, the egg's
    /// variables, `PATCH /servers/{id}/startup` and, only after a `200`,
    /// `POST /servers/{id}/reinstall`.
    pub async fn update_server_startup(
        &self,
        external_id: &str,
        pack: Option<u64>,
    ) -> PanelResult<()> {
        let server = self.servers.resolve(external_id).await?;
        let egg = self.required_egg(server.nest, server.egg).await?;
        let environment = self.required_environment(server.nest, server.egg).await?;
        let payload = UpdateStartupRequest::from_egg(server.egg, &egg, environment, pack);

        let response = self
            .api
            .send_json(
                Method::PATCH,
                Endpoint::ServerStartup(server.id),
                "server startup",
                &payload,
            )
            .await?;
        if response.status != STATUS_OK {
            return Err(self.api.failure(
                "update server startup",
                &server.id.to_string(),
                &response,
            ));
        }
        info!(server_id = server.id, external_id, "server startup updated");

        self.servers.reinstall_resolved(server.id).await
    }

    async fn required_egg(&self, nest_id: u64, egg_id: u64) -> PanelResult<Egg> {
        self.nests
            .egg(nest_id, egg_id)
            .await?
            .ok_or_else(|| PanelError::NotFound {
                resource: "egg",
                id: format!("{}/{}", nest_id, egg_id),
            })
    }

    async fn required_environment(&self, nest_id: u64, egg_id: u64) -> PanelResult<Environment> {
        self.nests
            .egg_environment(nest_id, egg_id)
            .await?
            .ok_or_else(|| PanelError::NotFound {
                resource: "egg variables",
                id: format!("{}/{}", nest_id, egg_id),
            })
    }
}
