/*
Document entries as they appear on disk, before validation.

Every field is optional here so that defaults (0.0 positions, no
dependencies, empty metadata) are applied in one place and a missing
`name` turns into MapError::MissingField instead of a parser message.
*/
use serde::Deserialize;

use crate::core::component::Component;
use crate::core::error::{MapError, Result};
use crate::core::graph::StrategyMap;
use crate::core::types::Metadata;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    components: Option<Vec<RawComponent>>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawComponent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    visibility: Option<f64>,
    #[serde(default)]
    evolution: Option<f64>,
    #[serde(default)]
    dependencies: Option<Vec<String>>,
}

impl RawComponent {
    fn into_component(self, index: usize) -> Result<Component> {
        //only an absent/null name is missing; `name: ''` is a legal (if odd) name
        let name = self.name.ok_or(MapError::MissingField { index, field: "name" })?;

        Ok(Component::new(
            name,
            self.visibility.unwrap_or(0.0),
            self.evolution.unwrap_or(0.0),
        )
        .with_dependencies(self.dependencies.unwrap_or_default()))
    }
}

impl RawDocument {
    //all-or-nothing: the first bad entry aborts, no partial map is returned
    pub(crate) fn into_map(self) -> Result<StrategyMap> {
        let components = self
            .components
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_component(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(StrategyMap::with_parts(
            components,
            self.metadata.unwrap_or_default(),
        ))
    }
}
