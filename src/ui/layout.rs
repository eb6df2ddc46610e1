//! Layout management for panel arrangement

use crate::state::PanelId;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel layout areas
///
/// ```text
/// ┌────────────┬──────────────────────────┬───────────────┐
/// │            │                          │   Details     │
/// │  Patterns  │   Architecture Diagram   │               │
/// │   (22%)    │                          ├───────────────┤
/// │            ├──────────────────────────┤  Principles   │
/// │            │   Implementation Example │               │
/// └────────────┴──────────────────────────┴───────────────┘
/// │ status bar                                            │
/// ```
pub struct AppLayout {
    /// Left panel: pattern selector (22%)
    pub selector: Rect,

    /// Center-top: architecture diagram (60% of center)
    pub diagram: Rect,

    /// Center-bottom: implementation example snippet (40% of center)
    pub code: Rect,

    /// Right-top: description and use cases
    pub details: Rect,

    /// Right-bottom: design principles and best practices
    pub principles: Rect,

    /// Bottom: status bar
    pub status: Rect,
}

/// Calculate layout areas for all panels
pub fn get_layout(area: Rect) -> AppLayout {
    // Main vertical split: content + status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content_area = main_chunks[0];
    let status = main_chunks[1];

    // Horizontal split: selector | center | right column
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(50),
            Constraint::Percentage(28),
        ])
        .split(content_area);

    let selector = h_chunks[0];
    let center = h_chunks[1];
    let right = h_chunks[2];

    // Vertical split in center: diagram | code example
    let center_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(center);

    // Vertical split in right column: details | principles
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(right);

    AppLayout {
        selector,
        diagram: center_chunks[0],
        code: center_chunks[1],
        details: right_chunks[0],
        principles: right_chunks[1],
        status,
    }
}

impl AppLayout {
    /// Determine which panel contains the given coordinates
    pub fn panel_at(&self, x: u16, y: u16) -> Option<PanelId> {
        let pos = (x, y).into();
        if self.selector.contains(pos) {
            Some(PanelId::SELECTOR)
        } else if self.diagram.contains(pos) {
            Some(PanelId::DIAGRAM)
        } else if self.code.contains(pos) {
            Some(PanelId::CODE)
        } else if self.details.contains(pos) {
            Some(PanelId::DETAILS)
        } else if self.principles.contains(pos) {
            Some(PanelId::PRINCIPLES)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_all_areas_nonzero() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_layout(area);

        assert!(layout.selector.width > 0);
        assert!(layout.diagram.width > 0);
        assert!(layout.code.width > 0);
        assert!(layout.details.width > 0);
        assert!(layout.principles.width > 0);
        assert!(layout.status.width > 0);
    }

    #[test]
    fn test_layout_status_bar_at_bottom() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_layout(area);

        assert_eq!(layout.status.y + layout.status.height, area.y + area.height);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_layout_diagram_above_code() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_layout(area);

        assert!(layout.diagram.y + layout.diagram.height <= layout.code.y);
        assert_eq!(layout.diagram.x, layout.code.x);
    }

    #[test]
    fn test_layout_small_terminal() {
        let area = Rect::new(0, 0, 40, 15);
        let layout = get_layout(area);

        assert!(layout.selector.width > 0);
        assert!(layout.diagram.height > 0);
    }

    #[test]
    fn test_panel_at_each_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_layout(area);

        let center = |r: Rect| (r.x + r.width / 2, r.y + r.height / 2);

        let (x, y) = center(layout.selector);
        assert_eq!(layout.panel_at(x, y), Some(PanelId::SELECTOR));

        let (x, y) = center(layout.diagram);
        assert_eq!(layout.panel_at(x, y), Some(PanelId::DIAGRAM));

        let (x, y) = center(layout.code);
        assert_eq!(layout.panel_at(x, y), Some(PanelId::CODE));

        let (x, y) = center(layout.details);
        assert_eq!(layout.panel_at(x, y), Some(PanelId::DETAILS));

        let (x, y) = center(layout.principles);
        assert_eq!(layout.panel_at(x, y), Some(PanelId::PRINCIPLES));
    }

    #[test]
    fn test_panel_at_outside() {
        let area = Rect::new(10, 10, 80, 30);
        let layout = get_layout(area);

        assert_eq!(layout.panel_at(0, 0), None);
    }
}
