use crate::core::{
    domain::{
        error::PanelResult,
        model::node::{Allocation, Node},
    },
    infrastructure::{api_client::ApiClient, endpoint::Endpoint},
};
use tracing::debug;

/// Read-only access to nodes and their allocations.
pub struct NodeService<'a> {
    api: &'a ApiClient,
}

impl<'a> NodeService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Lists nodes; succeeds only if the panel accepts the token and answers `200`.
    pub async fn test_connection(&self) -> PanelResult<()> {
        let nodes = self.nodes().await?;
        debug!(nodes = nodes.len(), "panel connection verified");
        Ok(())
    }

    pub async fn nodes(&self) -> PanelResult<Vec<Node>> {
        self.api.list(Endpoint::Nodes, "nodes").await
    }

    pub async fn node(&self, node_id: u64) -> PanelResult<Option<Node>> {
        self.api.fetch(Endpoint::Node(node_id), "node").await
    }

    /// Lists the allocations of a node that no server uses yet, in panel order.
    pub async fn free_allocations(&self, node_id: u64) -> PanelResult<Vec<Allocation>> {
        let allocations: Vec<Allocation> = self
            .api
            .list(Endpoint::NodeAllocations(node_id), "allocations")
            .await?;
        Ok(allocations
            .into_iter()
            .filter(|allocation| !allocation.assigned)
            .collect())
    }
}
