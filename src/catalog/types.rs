//! Data model for the architecture pattern catalog
//!
//! Everything here is compiled-in and immutable. The catalog is plain
//! `&'static` data, so the types carry static string slices throughout.

/// Semantic color for a diagram node, resolved to a concrete color by the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Purple,
    Blue,
    Green,
    Orange,
    Red,
    Cyan,
}

/// One node in a pattern diagram
///
/// `x`/`y` are percentage coordinates (0-100) within the diagram area.
/// Labels may contain `\n` for a second line.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub id: &'static str,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub color: ColorToken,
}

/// A directed edge between two nodes, optionally bidirectional
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
    pub bidirectional: bool,
}

impl Edge {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self {
            from,
            to,
            bidirectional: false,
        }
    }

    pub const fn bidi(from: &'static str, to: &'static str) -> Self {
        Self {
            from,
            to,
            bidirectional: true,
        }
    }
}

/// Small directed graph describing one architecture topology
#[derive(Debug, Clone, Copy)]
pub struct Diagram {
    pub nodes: &'static [Node],
    pub edges: &'static [Edge],
}

impl Diagram {
    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges whose endpoints do not both resolve to a node in this diagram
    ///
    /// A well-formed catalog has none; the renderer skips them either way.
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| self.node(e.from).is_none() || self.node(e.to).is_none())
            .collect()
    }

    /// True when every edge resolves to nodes in this diagram
    pub fn is_well_formed(&self) -> bool {
        self.dangling_edges().is_empty()
    }
}

/// One catalog entry: a named multi-agent topology with its diagram and
/// illustrative example text
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    /// Stable key used for selection
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub diagram: Diagram,
    /// Display-only source-like snippet, never parsed or executed
    pub example: &'static str,
}

/// A titled list of design-principle bullet points
#[derive(Debug, Clone, Copy)]
pub struct Principle {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

/// Do / don't lists of implementation best practices
#[derive(Debug, Clone, Copy)]
pub struct BestPractices {
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODES: &[Node] = &[
        Node {
            id: "a",
            label: "A",
            x: 10.0,
            y: 10.0,
            color: ColorToken::Blue,
        },
        Node {
            id: "b",
            label: "B",
            x: 90.0,
            y: 90.0,
            color: ColorToken::Green,
        },
    ];

    #[test]
    fn test_node_lookup() {
        let diagram = Diagram {
            nodes: NODES,
            edges: const { &[Edge::new("a", "b")] },
        };
        assert_eq!(diagram.node("a").map(|n| n.label), Some("A"));
        assert!(diagram.node("missing").is_none());
    }

    #[test]
    fn test_dangling_edge_detection() {
        let diagram = Diagram {
            nodes: NODES,
            edges: const { &[Edge::new("a", "b"), Edge::new("a", "ghost")] },
        };
        assert!(!diagram.is_well_formed());
        assert_eq!(diagram.dangling_edges().len(), 1);
        assert_eq!(diagram.dangling_edges()[0].to, "ghost");
    }

    #[test]
    fn test_well_formed() {
        let diagram = Diagram {
            nodes: NODES,
            edges: const { &[Edge::bidi("a", "b")] },
        };
        assert!(diagram.is_well_formed());
        assert!(diagram.edges[0].bidirectional);
    }
}
