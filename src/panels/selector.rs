//! Pattern selector panel
//!
//! One activation target per catalog entry. Moving the highlight applies
//! the selection immediately, which also stops any running simulation
//! view - same as picking a card does in any pattern browser.

use crate::catalog;
use crate::core::Result;
use crate::events::Event;
use crate::panels::Panel;
use crate::state::{AppState, PanelId};
use crate::ui::theme;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use std::cell::RefCell;

/// Pattern selector showing all catalog entries
pub struct SelectorPanel {
    /// List area for mouse click detection
    list_area: RefCell<Rect>,
}

impl Default for SelectorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorPanel {
    /// Create a new selector panel
    pub fn new() -> Self {
        Self {
            list_area: RefCell::new(Rect::default()),
        }
    }

    /// Index of the currently selected pattern in catalog order
    fn selected_index(state: &AppState) -> usize {
        catalog::patterns()
            .iter()
            .position(|p| p.id == state.selection.selected_id())
            .unwrap_or(0)
    }

    /// Apply the selection at the given catalog index
    fn select_index(state: &mut AppState, index: usize) {
        let patterns = catalog::patterns();
        if let Some(pattern) = patterns.get(index) {
            if state.selection.select_pattern(pattern.id) {
                state.info(format!("Selected: {}", pattern.name));
            }
        }
    }

    /// Move the selection up or down by one entry
    fn move_selection(state: &mut AppState, delta: isize) {
        let count = catalog::patterns().len();
        if count == 0 {
            return;
        }
        let current = Self::selected_index(state) as isize;
        let next = (current + delta).clamp(0, count as isize - 1) as usize;
        Self::select_index(state, next);
    }

    /// Select by click position (each entry takes 2 lines)
    fn select_at(&self, state: &mut AppState, row: u16) {
        let list_area = *self.list_area.borrow();
        if row < list_area.y || row >= list_area.y + list_area.height {
            return;
        }

        let clicked_row = (row - list_area.y) as usize;
        Self::select_index(state, clicked_row / 2);
    }
}

impl Panel for SelectorPanel {
    fn id(&self) -> PanelId {
        PanelId::SELECTOR
    }

    fn name(&self) -> &str {
        "Patterns"
    }

    fn handle_input(&mut self, event: &Event, state: &mut AppState) -> Result<bool> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    Self::move_selection(state, -1);
                    Ok(true)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    Self::move_selection(state, 1);
                    Ok(true)
                }
                KeyCode::Home => {
                    Self::select_index(state, 0);
                    Ok(true)
                }
                KeyCode::End => {
                    let count = catalog::patterns().len();
                    Self::select_index(state, count.saturating_sub(1));
                    Ok(true)
                }
                _ => Ok(false),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.select_at(state, mouse.row);
                    Ok(true)
                }
                _ => Ok(false),
            },
            _ => Ok(false),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
        let theme = theme();

        let border_style = if focused {
            Style::default().fg(theme.border_focused)
        } else {
            Style::default().fg(theme.border_unfocused)
        };

        let block = Block::default()
            .title(" Architecture Patterns ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        *self.list_area.borrow_mut() = inner;

        let selected_index = Self::selected_index(state);

        let items: Vec<ListItem> = catalog::patterns()
            .iter()
            .enumerate()
            .map(|(idx, pattern)| {
                let is_selected = idx == selected_index;

                let marker = if is_selected { "● " } else { "  " };
                let name_style = if is_selected {
                    Style::default()
                        .fg(theme.accent_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_primary)
                };

                let line1 = Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent_primary)),
                    Span::styled(pattern.name, name_style),
                ]);
                let line2 = Line::from(Span::styled(
                    format!("  {}", pattern.description),
                    Style::default().fg(theme.text_muted),
                ));

                let item_style = if is_selected {
                    Style::default().bg(theme.bg_selection)
                } else {
                    Style::default()
                };

                ListItem::new(vec![line1, line2]).style(item_style)
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }
}
