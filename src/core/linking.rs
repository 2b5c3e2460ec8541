// dependency edges between components
use tracing::trace;

use crate::core::error::{MapError, Result};
use crate::core::graph::StrategyMap;
use crate::core::types::DanglingDependency;

impl StrategyMap {
    //record `source` depends on `target`.
    //1. both names must resolve (first match) or nothing changes.
    //2. re-linking the same pair is a no-op.
    //3. cycles and self-links are allowed, there is no DAG check.
    pub fn link_components(&mut self, source: &str, target: &str) -> Result<()> {
        let src_idx = self.components.iter().position(|c| c.name() == source);
        let target_found = self.contains(target);

        let src_idx = match (src_idx, target_found) {
            (Some(idx), true) => idx,
            (src_idx, target_found) => {
                let mut missing = Vec::new();
                if src_idx.is_none() {
                    missing.push(source.to_string());
                }
                if !target_found {
                    missing.push(target.to_string());
                }
                return Err(MapError::MissingComponent { missing });
            }
        };

        if self.components[src_idx].push_dependency(target) {
            trace!(source, target, "linked components");
        }
        Ok(())
    }

    /// Edges whose target does not name any component. These only appear
    /// through hand-edited documents or direct construction, never through
    /// [`StrategyMap::link_components`].
    pub fn dangling_dependencies(&self) -> Vec<DanglingDependency> {
        self.components
            .iter()
            .flat_map(move |c| {
                c.dependencies()
                    .iter()
                    .filter(move |dep| !self.contains(dep))
                    .map(move |dep| DanglingDependency {
                        source: c.name().to_string(),
                        target: dep.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component::Component;

    fn two_nodes() -> StrategyMap {
        let mut m = StrategyMap::new();
        m.add_component(Component::new("A", 0.5, 0.5));
        m.add_component(Component::new("B", 0.4, 0.2));
        m
    }

    #[test]
    fn link_twice_records_single_edge() {
        let mut m = two_nodes();

        m.link_components("A", "B").unwrap();
        m.link_components("A", "B").unwrap();

        let deps = m.get_component("A").unwrap().dependencies();
        assert_eq!(deps.iter().filter(|d| *d == "B").count(), 1);
        assert!(m.get_component("B").unwrap().dependencies().is_empty());
    }

    #[test]
    fn link_rejects_missing_endpoints() {
        let mut m = two_nodes();

        let err = m.link_components("A", "Ghost").unwrap_err();
        match err {
            MapError::MissingComponent { missing } => assert_eq!(missing, vec!["Ghost"]),
            other => panic!("unexpected error: {}", other),
        }

        let err = m.link_components("Ghost", "B").unwrap_err();
        match err {
            MapError::MissingComponent { missing } => assert_eq!(missing, vec!["Ghost"]),
            other => panic!("unexpected error: {}", other),
        }

        let err = m.link_components("X", "Y").unwrap_err();
        match err {
            MapError::MissingComponent { missing } => assert_eq!(missing, vec!["X", "Y"]),
            other => panic!("unexpected error: {}", other),
        }

        // nothing was mutated by the failed calls
        assert!(m.get_component("A").unwrap().dependencies().is_empty());
    }

    #[test]
    fn cycles_and_self_links_are_accepted() {
        let mut m = two_nodes();

        m.link_components("A", "B").unwrap();
        m.link_components("B", "A").unwrap();
        m.link_components("A", "A").unwrap();

        assert_eq!(m.get_component("A").unwrap().dependencies(), ["B", "A"]);
        assert_eq!(m.get_component("B").unwrap().dependencies(), ["A"]);
    }

    #[test]
    fn self_link_on_absent_name_reports_both_endpoints() {
        let mut m = two_nodes();

        let err = m.link_components("Z", "Z").unwrap_err();
        match err {
            MapError::MissingComponent { missing } => assert_eq!(missing, vec!["Z", "Z"]),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn link_targets_first_component_with_duplicate_name() {
        let mut m = two_nodes();
        m.add_component(Component::new("A", 0.0, 0.0));

        m.link_components("A", "B").unwrap();

        assert!(m.components()[0].depends_on("B"));
        assert!(m.components()[2].dependencies().is_empty());
    }

    #[test]
    fn dangling_dependencies_reports_unresolved_targets_in_order() {
        let mut m = StrategyMap::new();
        m.add_component(Component::named("A").with_dependencies(["B", "Gone"]));
        m.add_component(Component::named("B").with_dependencies(["Lost"]));

        let dangling = m.dangling_dependencies();
        assert_eq!(
            dangling,
            vec![
                DanglingDependency { source: "A".into(), target: "Gone".into() },
                DanglingDependency { source: "B".into(), target: "Lost".into() },
            ]
        );
    }
}
