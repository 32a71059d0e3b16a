//! Domain models for nests and eggs.
//!
//! An egg is a server template (image, startup command, variables); eggs are
//! grouped under a nest.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variable name to default value, derived from an egg's variables.
pub type Environment = BTreeMap<String, String>;

/// A nest as returned by `/nests` and `/nests/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Nest {
    pub id: u64,
    pub uuid: String,
    pub author: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// An egg as returned by `/nests/{nest}/eggs` and `/nests/{nest}/eggs/{egg}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Egg {
    /// The panel-assigned identifier.
    pub id: u64,
    /// Egg UUID.
    pub uuid: String,
    /// Human-readable name.
    pub name: String,
    /// Id of the owning nest.
    pub nest: u64,
    /// Author e-mail.
    pub author: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Default docker image for servers built from this egg.
    pub docker_image: String,
    /// Startup command template.
    pub startup: String,
}

/// One entry of an egg's `variables` relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EggVariable {
    pub id: u64,
    pub name: String,
    pub env_variable: String,
    /// The panel sends `null` for variables without a default.
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub rules: String,
}
