//! Paths of the application API, relative to [`API_PREFIX`].

use crate::core::domain::value_object::{ExternalId, PanelUrl, ResourceId};
use std::fmt;
use url::form_urlencoded::byte_serialize;

/// Every application API path lives under this prefix.
pub const API_PREFIX: &str = "/api/application/";

/// One addressable resource (or action) of the application API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Nodes,
    Node(u64),
    NodeAllocations(u64),
    Users,
    User(&'a ResourceId),
    Nests,
    Nest(u64),
    Eggs { nest: u64 },
    Egg { nest: u64, egg: u64 },
    /// The egg with its `variables` relationship included.
    EggWithVariables { nest: u64, egg: u64 },
    Servers,
    Server(&'a ResourceId),
    ServerSuspend(u64),
    ServerUnsuspend(u64),
    ServerReinstall(u64),
    ServerDetails(u64),
    ServerBuild(u64),
    ServerStartup(u64),
}

impl Endpoint<'_> {
    /// Returns the path (and query, if any) below [`API_PREFIX`].
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Endpoint::Nodes => "nodes".to_string(),
            Endpoint::Node(id) => format!("nodes/{}", id),
            Endpoint::NodeAllocations(id) => format!("nodes/{}/allocations", id),
            Endpoint::Users => "users".to_string(),
            Endpoint::User(ResourceId::Internal(id)) => format!("users/{}", id),
            Endpoint::User(ResourceId::External(id)) => {
                format!("users/external/{}", path_segment(id))
            }
            Endpoint::Nests => "nests".to_string(),
            Endpoint::Nest(id) => format!("nests/{}", id),
            Endpoint::Eggs { nest } => format!("nests/{}/eggs", nest),
            Endpoint::Egg { nest, egg } => format!("nests/{}/eggs/{}", nest, egg),
            Endpoint::EggWithVariables { nest, egg } => {
                format!("nests/{}/eggs/{}?include=variables", nest, egg)
            }
            Endpoint::Servers => "servers".to_string(),
            Endpoint::Server(ResourceId::Internal(id)) => format!("servers/{}", id),
            Endpoint::Server(ResourceId::External(id)) => {
                format!("servers/external/{}", path_segment(id))
            }
            Endpoint::ServerSuspend(id) => format!("servers/{}/suspend", id),
            Endpoint::ServerUnsuspend(id) => format!("servers/{}/unsuspend", id),
            Endpoint::ServerReinstall(id) => format!("servers/{}/reinstall", id),
            Endpoint::ServerDetails(id) => format!("servers/{}/details", id),
            Endpoint::ServerBuild(id) => format!("servers/{}/build", id),
            Endpoint::ServerStartup(id) => format!("servers/{}/startup", id),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Percent-encodes an external id so it stays a single path segment.
///
/// Every byte outside `A-Z a-z 0-9 * - . _` is escaped; `\` can no longer act
/// as a separator. The serializer writes a space as `+`, while a literal `+`
/// comes out as `%2B`, so each remaining `+` is a space.
fn path_segment(id: &ExternalId) -> String {
    byte_serialize(id.as_str().as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Joins a base URL and an endpoint path into an absolute request URL.
#[must_use]
pub fn api_url(base: &PanelUrl, path: &str) -> String {
    format!(
        "{}{}{}",
        base.as_str(),
        API_PREFIX,
        path.trim_start_matches('/')
    )
}
