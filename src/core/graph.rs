// ordered component collection + opaque metadata
use serde::Serialize;

use crate::core::component::{Component, ComponentProjection};
use crate::core::types::{Metadata, MetadataValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyMap {
    pub(crate) components: Vec<Component>,
    pub(crate) metadata: Metadata,
}

/// Document-shaped copy of a [`StrategyMap`]: `components` first, then
/// `metadata`.
///
/// The metadata is a value clone of the map's metadata. Nothing beyond what
/// `Clone` provides is promised about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapProjection {
    pub components: Vec<ComponentProjection>,
    pub metadata: Metadata,
}

impl StrategyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(components: Vec<Component>, metadata: Metadata) -> Self {
        Self {
            components,
            metadata,
        }
    }

    /// Appends `component`. Names are not checked for uniqueness; a second
    /// component with an existing name is stored but shadowed on lookup.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    //first match in insertion order
    pub fn get_component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    pub fn get_component_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_component(name).is_some()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Returns the previous value stored under `key`, if any.
    pub fn insert_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.metadata
            .insert(MetadataValue::String(key.into()), value.into())
    }

    pub fn to_projection(&self) -> MapProjection {
        MapProjection {
            components: self.components.iter().map(Component::to_projection).collect(),
            metadata: self.metadata.clone(),
        }
    }

    /// Rebuilds a map from a projection taken earlier. Document loading does
    /// not go through here; it validates raw entries instead.
    pub fn from_projection(projection: MapProjection) -> Self {
        Self {
            components: projection.components.into_iter().map(Component::from).collect(),
            metadata: projection.metadata,
        }
    }
}
