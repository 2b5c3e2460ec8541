// component record: one named node on the map
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    visibility: f64,
    evolution: f64,
    dependencies: Vec<String>,
}

/// Serializable copy of a [`Component`]. Field order here is the field order
/// written to documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentProjection {
    pub name: String,
    pub visibility: f64,
    pub evolution: f64,
    pub dependencies: Vec<String>,
}

impl Component {
    /// Positions are stored as given; any f64 is accepted, including values
    /// outside the conventional 0.0..=1.0 range.
    pub fn new(name: impl Into<String>, visibility: f64, evolution: f64) -> Self {
        Self {
            name: name.into(),
            visibility,
            evolution,
            dependencies: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0)
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> f64 {
        self.visibility
    }

    pub fn evolution(&self) -> f64 {
        self.evolution
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }

    pub fn set_position(&mut self, visibility: f64, evolution: f64) {
        self.visibility = visibility;
        self.evolution = evolution;
    }

    //appends unless already present; callers validate that the target exists
    pub(crate) fn push_dependency(&mut self, target: &str) -> bool {
        if self.depends_on(target) {
            return false;
        }
        self.dependencies.push(target.to_string());
        true
    }

    pub fn to_projection(&self) -> ComponentProjection {
        ComponentProjection {
            name: self.name.clone(),
            visibility: self.visibility,
            evolution: self.evolution,
            dependencies: self.dependencies.clone(),
        }
    }
}

impl From<ComponentProjection> for Component {
    fn from(p: ComponentProjection) -> Self {
        Self {
            name: p.name,
            visibility: p.visibility,
            evolution: p.evolution,
            dependencies: p.dependencies,
        }
    }
}
