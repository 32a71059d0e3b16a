use crate::{
    core::{
        domain::{
            error::{PanelError, PanelResult},
            model::server::Server,
            value_object::{ExternalId, ResourceId},
        },
        infrastructure::{
            api_client::{ApiClient, STATUS_NO_CONTENT, STATUS_OK},
            endpoint::Endpoint,
        },
    },
    resources::application::request::update_server_request::{
        UpdateBuildRequest, UpdateDetailsRequest,
    },
};
use reqwest::Method;
use tracing::{info, warn};

/// Server lookups and the single-call lifecycle actions.
///
/// Every action addressed by external id first fetches the server to learn its
/// internal id; when that fetch comes back empty, no mutating request is sent.
pub struct ServerService<'a> {
    api: &'a ApiClient,
}

impl<'a> ServerService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn servers(&self) -> PanelResult<Vec<Server>> {
        self.api.list(Endpoint::Servers, "servers").await
    }

    pub async fn server(&self, id: &ResourceId) -> PanelResult<Option<Server>> {
        self.api.fetch(Endpoint::Server(id), "server").await
    }

    /// Fetches a server by external id, failing with `PanelError::NotFound` if absent.
    pub async fn resolve(&self, external_id: &str) -> PanelResult<Server> {
        let external = ResourceId::External(ExternalId::new(external_id)?);
        self.server(&external).await?.ok_or_else(|| {
            warn!(external_id, "server lookup by external id came back empty");
            PanelError::NotFound {
                resource: "server",
                id: external_id.to_string(),
            }
        })
    }

    /// Translates an external id into the panel's internal id.
    pub async fn resolve_server_id(&self, external_id: &str) -> PanelResult<u64> {
        Ok(self.resolve(external_id).await?.id)
    }

    pub async fn suspend_server(&self, external_id: &str) -> PanelResult<()> {
        let id = self.resolve_server_id(external_id).await?;
        self.post_action(Endpoint::ServerSuspend(id), "suspend server", id)
            .await?;
        info!(server_id = id, external_id, "server suspended");
        Ok(())
    }

    pub async fn unsuspend_server(&self, external_id: &str) -> PanelResult<()> {
        let id = self.resolve_server_id(external_id).await?;
        self.post_action(Endpoint::ServerUnsuspend(id), "unsuspend server", id)
            .await?;
        info!(server_id = id, external_id, "server unsuspended");
        Ok(())
    }

    pub async fn reinstall_server(&self, external_id: &str) -> PanelResult<()> {
        let id = self.resolve_server_id(external_id).await?;
        self.reinstall_resolved(id).await
    }

    /// Reinstalls a server whose internal id is already known.
    pub(crate) async fn reinstall_resolved(&self, server_id: u64) -> PanelResult<()> {
        self.post_action(
            Endpoint::ServerReinstall(server_id),
            "reinstall server",
            server_id,
        )
        .await?;
        info!(server_id, "server reinstall triggered");
        Ok(())
    }

    pub async fn delete_server(&self, external_id: &str) -> PanelResult<()> {
        let id = self.resolve_server_id(external_id).await?;
        let internal = ResourceId::internal(id);
        self.api
            .action(
                Method::DELETE,
                Endpoint::Server(&internal),
                None,
                STATUS_NO_CONTENT,
                "delete server",
                id,
            )
            .await?;
        info!(server_id = id, external_id, "server deleted");
        Ok(())
    }

    /// Replaces name, owner, description and external id. Only `200` is success.
    pub async fn update_server_details(
        &self,
        external_id: &str,
        details: &UpdateDetailsRequest,
    ) -> PanelResult<()> {
        if let Some(new_external_id) = &details.external_id {
            ExternalId::new(new_external_id.as_str())?;
        }
        let id = self.resolve_server_id(external_id).await?;
        let body = self.api.codec().encode("server details", details)?;
        self.api
            .action(
                Method::PATCH,
                Endpoint::ServerDetails(id),
                Some(body),
                STATUS_OK,
                "update server details",
                id,
            )
            .await?;
        info!(server_id = id, external_id, "server details updated");
        Ok(())
    }

    /// Replaces limits and the primary allocation. Only `200` is success.
    pub async fn update_server_build(
        &self,
        external_id: &str,
        build: &UpdateBuildRequest,
    ) -> PanelResult<()> {
        let id = self.resolve_server_id(external_id).await?;
        let body = self.api.codec().encode("server build", build)?;
        self.api
            .action(
                Method::PATCH,
                Endpoint::ServerBuild(id),
                Some(body),
                STATUS_OK,
                "update server build",
                id,
            )
            .await?;
        info!(server_id = id, external_id, "server build updated");
        Ok(())
    }

    async fn post_action(
        &self,
        endpoint: Endpoint<'_>,
        operation: &str,
        server_id: u64,
    ) -> PanelResult<()> {
        self.api
            .action(
                Method::POST,
                endpoint,
                None,
                STATUS_NO_CONTENT,
                operation,
                server_id,
            )
            .await
    }
}
