//! Pattern selection state machine
//!
//! Two transitions only: select a pattern (which always stops any running
//! simulation view) and toggle the simulation flag. Both are pure methods
//! on a plain struct, testable without a terminal.

use crate::catalog::{self, Pattern};

/// Current viewing-session state: which pattern is shown and whether the
/// simulation styling is active
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    selected: &'static Pattern,
    simulating: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    /// Initial state: first pattern in catalog order, not simulating.
    ///
    /// The catalog is compiled in and non-empty by construction.
    pub fn new() -> Self {
        Self {
            selected: &catalog::patterns()[0],
            simulating: false,
        }
    }

    /// The currently selected pattern
    pub fn selected(&self) -> &'static Pattern {
        self.selected
    }

    /// Stable id of the currently selected pattern
    pub fn selected_id(&self) -> &'static str {
        self.selected.id
    }

    /// Whether the simulation styling is active
    pub fn simulating(&self) -> bool {
        self.simulating
    }

    /// Select a pattern by id, stopping any in-progress simulation view.
    ///
    /// An id not present in the catalog is rejected with no state change;
    /// the selection never points at a nonexistent pattern. Returns whether
    /// the selection was applied.
    pub fn select_pattern(&mut self, id: &str) -> bool {
        match catalog::pattern(id) {
            Some(pattern) => {
                self.selected = pattern;
                self.simulating = false;
                true
            }
            None => false,
        }
    }

    /// Flip the simulation flag. No precondition.
    pub fn toggle_simulation(&mut self) {
        self.simulating = !self.simulating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state() {
        let selection = Selection::new();
        assert_eq!(selection.selected_id(), catalog::patterns()[0].id);
        assert!(!selection.simulating());
    }

    #[test]
    fn test_select_every_catalog_pattern() {
        for pattern in catalog::patterns() {
            let mut selection = Selection::new();
            selection.toggle_simulation();

            assert!(selection.select_pattern(pattern.id));
            assert_eq!(selection.selected_id(), pattern.id);
            assert!(!selection.simulating());
        }
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut selection = Selection::new();

        selection.toggle_simulation();
        assert!(selection.simulating());
        selection.toggle_simulation();
        assert!(!selection.simulating());
    }

    #[test]
    fn test_select_resets_simulation() {
        let mut selection = Selection::new();
        assert!(selection.select_pattern("router"));
        selection.toggle_simulation();
        assert!(selection.simulating());

        assert!(selection.select_pattern("sequential"));
        assert_eq!(selection.selected_id(), "sequential");
        assert!(!selection.simulating());
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut selection = Selection::new();
        assert!(selection.select_pattern("collaborative"));
        selection.toggle_simulation();

        assert!(!selection.select_pattern("nonexistent"));
        assert_eq!(selection.selected_id(), "collaborative");
        assert!(selection.simulating());
    }
}
