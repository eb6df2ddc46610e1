//! Diagram geometry
//!
//! Turns a catalog [`Diagram`](crate::catalog::Diagram) into a drawable
//! scene in the same percentage coordinate space. Pure data in, pure data
//! out - painting to the terminal lives in the diagram panel.

mod scene;

pub use scene::{build_scene, NodeBox, Scene, Segment, EDGE_MARGIN};
