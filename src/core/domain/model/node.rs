//! Domain models for nodes and their allocations.
//!
//! Nodes are read-only for this client: they are listed and fetched, never written.

use serde::{Deserialize, Serialize};

/// A Wings node as returned by `/nodes` and `/nodes/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Node {
    /// The panel-assigned identifier.
    pub id: u64,
    /// Node UUID.
    pub uuid: String,
    /// Whether the node is public for auto-deployment.
    pub public: bool,
    /// Human-readable name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Location the node belongs to.
    pub location_id: u64,
    /// Fully qualified domain name of the daemon.
    pub fqdn: String,
    /// `http` or `https`.
    pub scheme: String,
    /// Whether the daemon sits behind a proxy.
    pub behind_proxy: bool,
    /// Whether the node is in maintenance mode.
    pub maintenance_mode: bool,
    /// Total memory in MiB.
    pub memory: u64,
    /// Memory overallocation in percent (`-1` disables the check).
    pub memory_overallocate: i64,
    /// Total disk in MiB.
    pub disk: u64,
    /// Disk overallocation in percent (`-1` disables the check).
    pub disk_overallocate: i64,
    /// Maximum upload size in MiB.
    pub upload_size: u64,
    /// Daemon HTTP port.
    pub daemon_listen: u16,
    /// Daemon SFTP port.
    pub daemon_sftp: u16,
    /// Daemon data directory.
    pub daemon_base: String,
}

/// An IP:port pair on a node, from `/nodes/{id}/allocations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Allocation {
    /// The panel-assigned identifier.
    pub id: u64,
    /// Bound IP address.
    pub ip: String,
    /// Display alias for the IP.
    pub alias: Option<String>,
    /// Port number.
    pub port: u16,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Whether a server already uses this allocation.
    pub assigned: bool,
}
