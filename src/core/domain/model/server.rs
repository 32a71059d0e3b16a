//! Domain models for panel servers.
//!
//! This module defines the structures returned by the `/servers` endpoints.
//! Every field has a serde default, so an empty `attributes` object decodes to
//! [`Server::default()`], the zero-valued server.

use serde::{Deserialize, Serialize};

/// A game server as returned by `/servers`, `/servers/{id}` and
/// `/servers/external/{external_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Server {
    /// The panel-assigned identifier.
    pub id: u64,
    /// Caller-assigned correlation id.
    pub external_id: Option<String>,
    /// Full server UUID.
    pub uuid: String,
    /// Short identifier (first block of the UUID).
    pub identifier: String,
    /// Human-readable name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether the server is suspended.
    pub suspended: bool,
    /// Lifecycle status reported by newer panels (e.g. `"installing"`).
    pub status: Option<String>,
    /// Resource limits.
    pub limits: Limits,
    /// Feature limits (databases, allocations, backups).
    pub feature_limits: FeatureLimits,
    /// Owning user id.
    pub user: u64,
    /// Node the server lives on.
    pub node: u64,
    /// Primary allocation id.
    pub allocation: u64,
    /// Nest id.
    pub nest: u64,
    /// Egg id.
    pub egg: u64,
}

/// Resource limits of a server.
///
/// `swap = -1` means unlimited swap; `0` on memory/disk means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Limits {
    /// Memory in MiB.
    pub memory: i64,
    /// Swap in MiB.
    pub swap: i64,
    /// Disk in MiB.
    pub disk: i64,
    /// Block IO weight (10-1000).
    pub io: i64,
    /// CPU limit in percent of one core.
    pub cpu: i64,
    /// CPU pinning (e.g. `"0-1,3"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,
}

/// Feature limits of a server.
///
/// `databases` and `allocations` are always written, as `null` when unset;
/// the panel requires both keys to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureLimits {
    /// Maximum number of databases.
    pub databases: Option<u32>,
    /// Maximum number of additional allocations.
    pub allocations: Option<u32>,
    /// Maximum number of backups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<u32>,
}

impl Server {
    /// Returns true if every field holds its zero value.
    ///
    /// A panel that answers `201` with such a server did not create anything usable.
    #[must_use]
    pub fn is_zero_valued(&self) -> bool {
        *self == Server::default()
    }
}
