//! Static catalog of architecture patterns and design principles
//!
//! The catalog is defined once at compile time and never mutated. Accessors
//! return the same order-stable data on every call.

mod data;
mod types;

pub use types::{BestPractices, ColorToken, Diagram, Edge, Node, Pattern, Principle};

/// All architecture patterns, in display order
pub fn patterns() -> &'static [Pattern] {
    data::PATTERNS
}

/// All design principles, in display order
pub fn principles() -> &'static [Principle] {
    data::PRINCIPLES
}

/// Implementation best practices (do / don't lists)
pub fn best_practices() -> &'static BestPractices {
    &data::BEST_PRACTICES
}

/// Look up a pattern by its stable id
pub fn pattern(id: &str) -> Option<&'static Pattern> {
    data::PATTERNS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order_stable() {
        let ids: Vec<_> = patterns().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                "hierarchical",
                "sequential",
                "collaborative",
                "router",
                "hybrid"
            ]
        );
    }

    #[test]
    fn test_pattern_lookup() {
        assert_eq!(pattern("router").map(|p| p.name), Some("Router/Dispatcher"));
        assert!(pattern("nonexistent").is_none());
    }

    #[test]
    fn test_all_diagrams_well_formed() {
        for p in patterns() {
            assert!(
                p.diagram.is_well_formed(),
                "pattern {} has dangling edges",
                p.id
            );
        }
    }

    #[test]
    fn test_node_ids_unique_within_diagram() {
        for p in patterns() {
            for node in p.diagram.nodes {
                let count = p
                    .diagram
                    .nodes
                    .iter()
                    .filter(|n| n.id == node.id)
                    .count();
                assert_eq!(count, 1, "duplicate node id {} in {}", node.id, p.id);
            }
        }
    }

    #[test]
    fn test_coordinates_in_percent_range() {
        for p in patterns() {
            for node in p.diagram.nodes {
                assert!((0.0..=100.0).contains(&node.x), "{}:{}", p.id, node.id);
                assert!((0.0..=100.0).contains(&node.y), "{}:{}", p.id, node.id);
            }
        }
    }

    #[test]
    fn test_principles_present() {
        assert_eq!(principles().len(), 4);
        assert!(principles().iter().all(|p| !p.points.is_empty()));
        assert_eq!(best_practices().dos.len(), best_practices().donts.len());
    }

    #[test]
    fn test_every_pattern_has_content() {
        for p in patterns() {
            assert!(!p.use_cases.is_empty());
            assert!(!p.example.is_empty());
            assert!(!p.diagram.nodes.is_empty());
        }
    }
}
