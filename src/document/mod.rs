//! Load/save of a [`StrategyMap`] as a text document.
//!
//! YAML is the default format. Paths ending in `.toon` use TOON instead, so
//! maps can sit next to the `.toon` fact files other tooling reads.
//!
//! Loading is all-or-nothing: an entry without a `name` aborts with
//! [`MapError::MissingField`]. Read, write and parse failures are returned as
//! the underlying error.

mod entries;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::error::{MapError, Result};
use crate::core::graph::StrategyMap;
use entries::RawDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Toon,
}

impl DocumentFormat {
    /// `.toon` (any case) selects TOON; everything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toon") => DocumentFormat::Toon,
            _ => DocumentFormat::Yaml,
        }
    }

    pub fn parse(self, text: &str) -> Result<StrategyMap> {
        match self {
            DocumentFormat::Yaml => from_yaml_str(text),
            DocumentFormat::Toon => from_toon_str(text),
        }
    }

    pub fn render(self, map: &StrategyMap) -> Result<String> {
        match self {
            DocumentFormat::Yaml => to_yaml_string(map),
            DocumentFormat::Toon => to_toon_string(map),
        }
    }
}

pub fn from_yaml_str(text: &str) -> Result<StrategyMap> {
    if text.trim().is_empty() {
        return Ok(StrategyMap::new());
    }
    //a bare `~` / `null` document counts as empty too
    let doc: Option<RawDocument> = serde_yaml::from_str(text)?;
    doc.unwrap_or_default().into_map()
}

pub fn to_yaml_string(map: &StrategyMap) -> Result<String> {
    Ok(serde_yaml::to_string(&map.to_projection())?)
}

pub fn from_toon_str(text: &str) -> Result<StrategyMap> {
    if text.trim().is_empty() {
        return Ok(StrategyMap::new());
    }
    let doc: RawDocument =
        toon_format::decode_default(text).map_err(|e| MapError::Toon(e.to_string()))?;
    doc.into_map()
}

pub fn to_toon_string(map: &StrategyMap) -> Result<String> {
    toon_format::encode_default(&map.to_projection()).map_err(|e| MapError::Toon(e.to_string()))
}

/// Reads the map at `path`, picking the format from its extension.
pub fn load_map(path: impl AsRef<Path>) -> Result<StrategyMap> {
    let path = path.as_ref();
    load_map_as(path, DocumentFormat::from_path(path))
}

pub fn load_map_as(path: impl AsRef<Path>, format: DocumentFormat) -> Result<StrategyMap> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let map = format.parse(&text)?;

    debug!(
        path = %path.display(),
        ?format,
        components = map.len(),
        "loaded strategy map"
    );

    let dangling = map.dangling_dependencies();
    if !dangling.is_empty() {
        warn!(
            path = %path.display(),
            count = dangling.len(),
            "strategy map has dependencies on unknown components"
        );
    }

    Ok(map)
}

/// Writes `map` to `path`, creating or truncating the file.
pub fn save_map(map: &StrategyMap, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    save_map_as(map, path, DocumentFormat::from_path(path))
}

pub fn save_map_as(map: &StrategyMap, path: impl AsRef<Path>, format: DocumentFormat) -> Result<()> {
    let path = path.as_ref();
    let text = format.render(map)?;
    fs::write(path, text)?;

    debug!(
        path = %path.display(),
        ?format,
        components = map.len(),
        "saved strategy map"
    );
    Ok(())
}
