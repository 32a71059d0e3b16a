//! Payloads of the three server update endpoints.

use crate::core::domain::model::{
    nest::{Egg, Environment},
    server::{FeatureLimits, Limits},
};
use serde::Serialize;

/// Payload of `PATCH /servers/{id}/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateDetailsRequest {
    /// New owner id.
    pub user: u64,
    pub name: String,
    pub description: Option<String>,
    /// Sent as `null` to clear the external id.
    pub external_id: Option<String>,
}

/// Payload of `PATCH /servers/{id}/build`.
///
/// Limits travel as top-level keys on this endpoint, not in a `limits` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateBuildRequest {
    /// Primary allocation id.
    pub allocation: u64,
    pub memory: i64,
    pub swap: i64,
    pub io: i64,
    pub cpu: i64,
    pub disk: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,
    pub oom_disabled: bool,
    pub feature_limits: FeatureLimits,
}

impl UpdateBuildRequest {
    /// Builds the payload from a set of limits; OOM killer disabled, no feature limits.
    pub fn new(allocation: u64, limits: &Limits) -> Self {
        Self {
            allocation,
            memory: limits.memory,
            swap: limits.swap,
            io: limits.io,
            cpu: limits.cpu,
            disk: limits.disk,
            threads: limits.threads.clone(),
            oom_disabled: true,
            feature_limits: FeatureLimits::default(),
        }
    }

    pub fn feature_limits(mut self, feature_limits: FeatureLimits) -> Self {
        self.feature_limits = feature_limits;
        self
    }

    pub fn oom_disabled(mut self, oom_disabled: bool) -> Self {
        self.oom_disabled = oom_disabled;
        self
    }
}

/// Payload of `PATCH /servers/{id}/startup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStartupRequest {
    pub environment: Environment,
    pub startup: String,
    pub egg: u64,
    /// Service pack id, only understood by legacy (0.7) panels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack: Option<u64>,
    pub image: String,
    pub skip_scripts: bool,
}

impl UpdateStartupRequest {
    /// Resets a server to its egg's startup command, image and variable defaults.
    pub fn from_egg(egg_id: u64, egg: &Egg, environment: Environment, pack: Option<u64>) -> Self {
        Self {
            environment,
            startup: egg.startup.clone(),
            egg: egg_id,
            pack,
            image: egg.docker_image.clone(),
            skip_scripts: false,
        }
    }
}
