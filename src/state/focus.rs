//! Focus management for panels
//!
//! Tracks which panel has focus and provides Tab-order navigation.

/// Unique identifier for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub usize);

impl PanelId {
    /// Pattern selector (left list)
    pub const SELECTOR: PanelId = PanelId(0);

    /// Architecture diagram (center-top)
    pub const DIAGRAM: PanelId = PanelId(1);

    /// Implementation example snippet (center-bottom)
    pub const CODE: PanelId = PanelId(2);

    /// Description and use cases (right-top)
    pub const DETAILS: PanelId = PanelId(3);

    /// Design principles and best practices (right-bottom)
    pub const PRINCIPLES: PanelId = PanelId(4);
}

/// Focus state management
pub struct FocusState {
    /// Currently focused panel
    current: PanelId,

    /// Focus ring (panels in tab order)
    ring: Vec<PanelId>,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusState {
    /// Create new focus state with the default panel ring
    pub fn new() -> Self {
        Self {
            // Start at the selector - picking a pattern is the primary action
            current: PanelId::SELECTOR,
            ring: vec![
                PanelId::SELECTOR,
                PanelId::DIAGRAM,
                PanelId::CODE,
                PanelId::DETAILS,
                PanelId::PRINCIPLES,
            ],
        }
    }

    /// Get currently focused panel
    pub fn current(&self) -> PanelId {
        self.current
    }

    /// Check if a panel is focused
    pub fn is_focused(&self, id: PanelId) -> bool {
        self.current == id
    }

    /// Focus a specific panel
    pub fn focus(&mut self, id: PanelId) {
        self.current = id;
    }

    /// Cycle to next panel in ring
    pub fn next(&mut self) {
        if let Some(idx) = self.ring.iter().position(|&id| id == self.current) {
            self.current = self.ring[(idx + 1) % self.ring.len()];
        }
    }

    /// Cycle to previous panel in ring
    pub fn prev(&mut self) {
        if let Some(idx) = self.ring.iter().position(|&id| id == self.current) {
            let prev_idx = if idx == 0 { self.ring.len() - 1 } else { idx - 1 };
            self.current = self.ring[prev_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus() {
        let focus = FocusState::new();
        assert_eq!(focus.current(), PanelId::SELECTOR);
    }

    #[test]
    fn test_focus_change() {
        let mut focus = FocusState::new();

        focus.focus(PanelId::DIAGRAM);
        assert_eq!(focus.current(), PanelId::DIAGRAM);
        assert!(focus.is_focused(PanelId::DIAGRAM));
        assert!(!focus.is_focused(PanelId::SELECTOR));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut focus = FocusState::new();

        focus.focus(PanelId::PRINCIPLES);
        focus.next();
        assert_eq!(focus.current(), PanelId::SELECTOR);

        focus.prev();
        assert_eq!(focus.current(), PanelId::PRINCIPLES);
    }
}
