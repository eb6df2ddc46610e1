//! Panel system with trait-based composition
//!
//! Each panel implements the Panel trait for consistent behavior.
//!
//! Layout:
//! - Selector (left): pattern list
//! - Diagram (center-top): animated node/edge diagram
//! - Code (center-bottom): implementation example snippet
//! - Details (right-top): description and use cases
//! - Principles (right-bottom): design principles and best practices

mod code;
mod details;
mod diagram;
mod highlight;
mod principles;
mod selector;

pub use code::CodePanel;
pub use details::DetailsPanel;
pub use diagram::DiagramPanel;
pub use highlight::Highlighter;
pub use principles::PrinciplesPanel;
pub use selector::SelectorPanel;

use crate::core::Result;
use crate::events::Event;
use crate::state::{AppState, PanelId};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Panel trait - defines the interface for all panels
///
/// Each panel manages its own view state and rendering; the shared
/// selection lives in [`AppState`] and is passed in read-only at render.
pub trait Panel {
    /// Get the panel's unique identifier
    fn id(&self) -> PanelId;

    /// Get the panel's display name
    fn name(&self) -> &str;

    /// Handle an input event
    ///
    /// Returns Ok(true) if the event was consumed, Ok(false) to propagate.
    fn handle_input(&mut self, event: &Event, state: &mut AppState) -> Result<bool>;

    /// Render the panel to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool);
}

/// Container for all panels
pub struct PanelRegistry {
    /// Left panel: pattern selector
    pub selector: SelectorPanel,

    /// Center-top: architecture diagram
    pub diagram: DiagramPanel,

    /// Center-bottom: implementation example
    pub code: CodePanel,

    /// Right-top: description and use cases
    pub details: DetailsPanel,

    /// Right-bottom: design principles
    pub principles: PrinciplesPanel,
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelRegistry {
    /// Create panel registry with all default panels
    pub fn new() -> Self {
        Self {
            selector: SelectorPanel::new(),
            diagram: DiagramPanel::new(),
            code: CodePanel::new(),
            details: DetailsPanel::new(),
            principles: PrinciplesPanel::new(),
        }
    }

    /// Get mutable panel by ID
    pub fn get_mut(&mut self, id: PanelId) -> &mut dyn Panel {
        match id {
            PanelId::SELECTOR => &mut self.selector,
            PanelId::DIAGRAM => &mut self.diagram,
            PanelId::CODE => &mut self.code,
            PanelId::DETAILS => &mut self.details,
            PanelId::PRINCIPLES => &mut self.principles,
            _ => &mut self.selector, // fallback
        }
    }
}
