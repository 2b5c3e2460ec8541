use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Error, Debug)]
pub enum MapError {
    /// `link_components` was given a name that does not resolve. `missing`
    /// lists every unresolved endpoint, source first.
    #[error("component(s) not found: {}", .missing.join(", "))]
    MissingComponent { missing: Vec<String> },

    #[error("component entry #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOON error: {0}")]
    Toon(String),
}
