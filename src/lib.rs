//! agentmap - interactive terminal explorer for multi-agent architecture patterns
//!
//! Presents a small catalog of coordination patterns (hierarchical,
//! sequential, collaborative, router, hybrid) with an animated node/edge
//! diagram, implementation example snippets, and design-principle
//! reference lists.

pub mod catalog;
pub mod config;
pub mod core;
pub mod diagram;
pub mod events;
pub mod panels;
pub mod state;
pub mod ui;

pub use crate::core::{AgentmapError, Result};
pub use state::AppState;
