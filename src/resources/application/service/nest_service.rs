use crate::{
    core::{
        domain::{
            error::PanelResult,
            model::nest::{Egg, Environment, Nest},
        },
        infrastructure::{api_client::ApiClient, endpoint::Endpoint},
    },
    resources::application::response::egg_variables_response::EggWithVariables,
};

/// Read access to nests, eggs and egg variable defaults.
pub struct NestService<'a> {
    api: &'a ApiClient,
}

impl<'a> NestService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn nests(&self) -> PanelResult<Vec<Nest>> {
        self.api.list(Endpoint::Nests, "nests").await
    }

    pub async fn nest(&self, nest_id: u64) -> PanelResult<Option<Nest>> {
        self.api.fetch(Endpoint::Nest(nest_id), "nest").await
    }

    pub async fn eggs(&self, nest_id: u64) -> PanelResult<Vec<Egg>> {
        self.api.list(Endpoint::Eggs { nest: nest_id }, "eggs").await
    }

    pub async fn egg(&self, nest_id: u64, egg_id: u64) -> PanelResult<Option<Egg>> {
        self.api
            .fetch(
                Endpoint::Egg {
                    nest: nest_id,
                    egg: egg_id,
                },
                "egg",
            )
            .await
    }

    /// Fetches the egg's variables and returns their default values by name.
    pub async fn egg_environment(
        &self,
        nest_id: u64,
        egg_id: u64,
    ) -> PanelResult<Option<Environment>> {
        let egg: Option<EggWithVariables> = self
            .api
            .fetch(
                Endpoint::EggWithVariables {
                    nest: nest_id,
                    egg: egg_id,
                },
                "egg variables",
            )
            .await?;
        Ok(egg.map(EggWithVariables::into_environment))
    }
}
