/// Free-form map metadata. Keys keep their insertion order.
pub type Metadata = serde_yaml::Mapping;

/// A schema-less metadata value: scalar, sequence or mapping.
pub type MetadataValue = serde_yaml::Value;

/// A dependency edge whose target names no component in the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDependency {
    pub source: String,
    pub target: String,
}
