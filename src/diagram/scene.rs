//! Scene construction from a pattern diagram
//!
//! Nodes become centered label boxes at their percentage coordinates.
//! Each resolvable edge becomes a line segment leaving just below the
//! source box and arriving just above the target box; bidirectional edges
//! add a second, dashed segment in the reverse direction. Edges whose
//! endpoints do not resolve are skipped - malformed data must never break
//! the rest of the view.

use crate::catalog::{ColorToken, Diagram};

/// Vertical gap between a node anchor and the start/end of its edges,
/// in percent of the diagram height. Keeps lines clear of the label boxes.
pub const EDGE_MARGIN: f64 = 5.0;

/// One directed line segment in percentage space, terminating in an arrowhead
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Reverse half of a bidirectional edge, drawn dashed
    pub dashed: bool,
}

impl Segment {
    /// Arrowhead glyph for the terminal end, from the dominant direction.
    ///
    /// The y axis points down, matching the diagram coordinates.
    pub fn arrow(&self) -> char {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        if dy.abs() >= dx.abs() {
            if dy >= 0.0 {
                '▼'
            } else {
                '▲'
            }
        } else if dx >= 0.0 {
            '►'
        } else {
            '◄'
        }
    }
}

/// A node label box anchored so that its center sits on `(x, y)`
#[derive(Debug, Clone, Copy)]
pub struct NodeBox {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub color: ColorToken,
}

/// Drawable description of one diagram
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub boxes: Vec<NodeBox>,
    pub segments: Vec<Segment>,
}

/// Build the drawable scene for a diagram.
///
/// Edges referencing a nonexistent node id are silently omitted.
pub fn build_scene(diagram: &Diagram) -> Scene {
    let boxes = diagram
        .nodes
        .iter()
        .map(|n| NodeBox {
            x: n.x,
            y: n.y,
            label: n.label,
            color: n.color,
        })
        .collect();

    let mut segments = Vec::with_capacity(diagram.edges.len());
    for edge in diagram.edges {
        let (from, to) = match (diagram.node(edge.from), diagram.node(edge.to)) {
            (Some(from), Some(to)) => (from, to),
            // Dangling edge: skip, keep rendering the rest
            _ => continue,
        };

        segments.push(Segment {
            x1: from.x,
            y1: from.y + EDGE_MARGIN,
            x2: to.x,
            y2: to.y - EDGE_MARGIN,
            dashed: false,
        });

        if edge.bidirectional {
            segments.push(Segment {
                x1: to.x,
                y1: to.y - EDGE_MARGIN,
                x2: from.x,
                y2: from.y + EDGE_MARGIN,
                dashed: true,
            });
        }
    }

    Scene { boxes, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, ColorToken, Diagram, Edge, Node};
    use pretty_assertions::assert_eq;

    const TWO_NODES: &[Node] = &[
        Node {
            id: "src",
            label: "Source",
            x: 50.0,
            y: 10.0,
            color: ColorToken::Blue,
        },
        Node {
            id: "dst",
            label: "Target",
            x: 50.0,
            y: 60.0,
            color: ColorToken::Green,
        },
    ];

    #[test]
    fn test_plain_edge_single_segment() {
        let diagram = Diagram {
            nodes: TWO_NODES,
            edges: const { &[Edge::new("src", "dst")] },
        };
        let scene = build_scene(&diagram);

        assert_eq!(scene.segments.len(), 1);
        let seg = scene.segments[0];
        assert!(!seg.dashed);
        // Leaves below the source, arrives above the target
        assert_eq!(seg.y1, 10.0 + EDGE_MARGIN);
        assert_eq!(seg.y2, 60.0 - EDGE_MARGIN);
    }

    #[test]
    fn test_bidirectional_edge_two_segments() {
        let diagram = Diagram {
            nodes: TWO_NODES,
            edges: const { &[Edge::bidi("src", "dst")] },
        };
        let scene = build_scene(&diagram);

        assert_eq!(scene.segments.len(), 2);
        assert!(!scene.segments[0].dashed);
        assert!(scene.segments[1].dashed);
        // Reverse segment swaps endpoints of the forward one
        assert_eq!(scene.segments[1].x1, scene.segments[0].x2);
        assert_eq!(scene.segments[1].y1, scene.segments[0].y2);
        assert_eq!(scene.segments[1].x2, scene.segments[0].x1);
        assert_eq!(scene.segments[1].y2, scene.segments[0].y1);
    }

    #[test]
    fn test_dangling_edge_skipped() {
        let diagram = Diagram {
            nodes: TWO_NODES,
            edges: const {
                &[
                    Edge::new("src", "ghost"),
                    Edge::new("src", "dst"),
                    Edge::new("ghost", "dst"),
                ]
            },
        };
        let scene = build_scene(&diagram);

        // Only the resolvable edge renders; boxes are untouched
        assert_eq!(scene.segments.len(), 1);
        assert_eq!(scene.boxes.len(), 2);
    }

    #[test]
    fn test_boxes_anchor_on_node_coordinates() {
        let diagram = Diagram {
            nodes: TWO_NODES,
            edges: &[],
        };
        let scene = build_scene(&diagram);

        assert_eq!(scene.boxes.len(), 2);
        assert_eq!(scene.boxes[0].x, 50.0);
        assert_eq!(scene.boxes[0].y, 10.0);
        assert_eq!(scene.boxes[0].label, "Source");
    }

    #[test]
    fn test_hierarchical_scene() {
        let pattern = catalog::pattern("hierarchical").unwrap();
        let scene = build_scene(&pattern.diagram);

        // Three edges, none bidirectional, all fanning out from the manager
        assert_eq!(scene.segments.len(), 3);
        let manager = pattern.diagram.node("manager").unwrap();
        for seg in &scene.segments {
            assert!(!seg.dashed);
            assert_eq!(seg.x1, manager.x);
            assert_eq!(seg.y1, manager.y + EDGE_MARGIN);
        }
    }

    #[test]
    fn test_collaborative_scene() {
        let pattern = catalog::pattern("collaborative").unwrap();
        let scene = build_scene(&pattern.diagram);

        // 4 bidirectional edges -> 4 forward + 4 reverse segments
        assert_eq!(scene.boxes.len(), 4);
        assert_eq!(scene.segments.len(), 8);
        assert_eq!(scene.segments.iter().filter(|s| s.dashed).count(), 4);
    }

    #[test]
    fn test_catalog_scenes_match_edge_counts() {
        // Rendered segments are exactly the resolvable edges, doubled when
        // bidirectional; the shipped catalog has no dangling edges.
        for pattern in catalog::patterns() {
            let expected: usize = pattern
                .diagram
                .edges
                .iter()
                .map(|e| if e.bidirectional { 2 } else { 1 })
                .sum();
            let scene = build_scene(&pattern.diagram);
            assert_eq!(scene.segments.len(), expected, "pattern {}", pattern.id);
        }
    }

    #[test]
    fn test_arrow_direction() {
        let down = Segment {
            x1: 50.0,
            y1: 15.0,
            x2: 50.0,
            y2: 55.0,
            dashed: false,
        };
        assert_eq!(down.arrow(), '▼');

        let up = Segment {
            x1: 50.0,
            y1: 55.0,
            x2: 50.0,
            y2: 15.0,
            dashed: true,
        };
        assert_eq!(up.arrow(), '▲');

        let right = Segment {
            x1: 15.0,
            y1: 35.0,
            x2: 45.0,
            y2: 35.0,
            dashed: false,
        };
        assert_eq!(right.arrow(), '►');

        let left = Segment {
            x1: 45.0,
            y1: 35.0,
            x2: 15.0,
            y2: 35.0,
            dashed: false,
        };
        assert_eq!(left.arrow(), '◄');
    }
}
