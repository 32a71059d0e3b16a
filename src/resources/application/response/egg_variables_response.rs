//! Attributes of an egg fetched with `?include=variables`.

use crate::core::{
    domain::model::nest::{EggVariable, Environment},
    infrastructure::envelope_codec::ListEnvelope,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct EggWithVariables {
    #[serde(default)]
    relationships: EggRelationships,
}

#[derive(Debug, Deserialize)]
struct EggRelationships {
    variables: ListEnvelope<EggVariable>,
}

impl Default for EggRelationships {
    fn default() -> Self {
        Self {
            variables: ListEnvelope {
                data: Vec::new(),
                meta: None,
            },
        }
    }
}

impl EggWithVariables {
    /// Maps each variable to its default value (`null` becomes `""`);
    /// variables without a name are skipped.
    pub(crate) fn into_environment(self) -> Environment {
        self.relationships
            .variables
            .data
            .into_iter()
            .map(|item| item.attributes)
            .filter(|variable| !variable.env_variable.is_empty())
            .map(|variable| {
                (
                    variable.env_variable,
                    variable.default_value.unwrap_or_default(),
                )
            })
            .collect()
    }
}
