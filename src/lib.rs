//! Strategy maps: named components placed on visibility/evolution axes,
//! linked by directed dependency edges, persisted as YAML or TOON documents.

pub mod core;
pub mod document;

pub use crate::core::component::{Component, ComponentProjection};
pub use crate::core::error::{MapError, Result};
pub use crate::core::graph::{MapProjection, StrategyMap};
pub use crate::core::types::{DanglingDependency, Metadata, MetadataValue};
pub use crate::document::{
    DocumentFormat, from_toon_str, from_yaml_str, load_map, load_map_as, save_map, save_map_as,
    to_toon_string, to_yaml_string,
};
