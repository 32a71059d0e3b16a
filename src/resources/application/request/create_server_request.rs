use crate::core::domain::{
    error::ValidationError,
    model::{
        nest::{Egg, Environment},
        server::{FeatureLimits, Limits},
    },
    value_object::ExternalId,
};
use serde::Serialize;

/// What the caller wants created.
///
/// The egg's docker image, startup command and environment defaults are not
/// part of it; `create_server` fetches them from the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServer {
    pub name: String,
    pub description: Option<String>,
    pub external_id: Option<String>,
    /// Owning user id.
    pub user: u64,
    pub nest: u64,
    pub egg: u64,
    /// Allocation id the server binds to by default.
    pub allocation: u64,
    pub limits: Limits,
    pub feature_limits: FeatureLimits,
    /// Defaults to `true`.
    pub oom_disabled: bool,
    /// Defaults to `false`.
    pub start_on_completion: bool,
}

impl NewServer {
    pub fn new(
        name: impl Into<String>,
        user: u64,
        nest: u64,
        egg: u64,
        allocation: u64,
        limits: Limits,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            external_id: None,
            user,
            nest,
            egg,
            allocation,
            limits,
            feature_limits: FeatureLimits::default(),
            oom_disabled: true,
            start_on_completion: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn feature_limits(mut self, feature_limits: FeatureLimits) -> Self {
        self.feature_limits = feature_limits;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Field {
                field: "name".to_string(),
                message: "Server name cannot be empty".to_string(),
            });
        }
        if let Some(external_id) = &self.external_id {
            ExternalId::new(external_id.as_str())?;
        }
        Ok(())
    }
}

/// `allocation` block of the creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSelection {
    pub default: u64,
}

/// Payload of `POST /servers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateServerRequest {
    pub name: String,
    pub user: u64,
    pub nest: u64,
    pub egg: u64,
    pub docker_image: String,
    pub startup: String,
    pub description: Option<String>,
    pub oom_disabled: bool,
    pub limits: Limits,
    pub feature_limits: FeatureLimits,
    pub environment: Environment,
    pub start_on_completion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub allocation: AllocationSelection,
}

impl CreateServerRequest {
    /// Merges the caller's fields with the egg and its environment defaults.
    pub fn assemble(server: &NewServer, egg: &Egg, environment: Environment) -> Self {
        Self {
            name: server.name.clone(),
            user: server.user,
            nest: server.nest,
            egg: server.egg,
            docker_image: egg.docker_image.clone(),
            startup: egg.startup.clone(),
            description: server.description.clone(),
            oom_disabled: server.oom_disabled,
            limits: server.limits.clone(),
            feature_limits: server.feature_limits.clone(),
            environment,
            start_on_completion: server.start_on_completion,
            external_id: server.external_id.clone(),
            allocation: AllocationSelection {
                default: server.allocation,
            },
        }
    }
}
