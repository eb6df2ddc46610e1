//! Implementation example panel
//!
//! Shows the selected pattern's illustrative snippet with syntax
//! highlighting. The snippet is display-only content from the catalog.

use crate::core::Result;
use crate::events::Event;
use crate::panels::{Highlighter, Panel};
use crate::state::{AppState, PanelId};
use crate::ui::theme;
use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scrollable, highlighted view of the example snippet
pub struct CodePanel {
    highlighter: Highlighter,

    /// Highlighted lines cached per pattern id
    cache: Option<(&'static str, Vec<Line<'static>>)>,

    /// Vertical scroll offset
    scroll: u16,

    /// Visible height from the last render, for scroll clamping
    visible_height: u16,
}

impl Default for CodePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CodePanel {
    /// Create a new code panel
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::new(),
            cache: None,
            scroll: 0,
            visible_height: 0,
        }
    }

    /// Highlighted lines for the current selection, re-highlighting on change
    fn lines_for(&mut self, state: &AppState) -> &[Line<'static>] {
        let pattern = state.selection.selected();
        let stale = !matches!(&self.cache, Some((id, _)) if *id == pattern.id);
        if stale {
            // Snippets are JavaScript-flavored illustration text
            let lines = self.highlighter.highlight(pattern.example, "js");
            self.cache = Some((pattern.id, lines));
            self.scroll = 0;
        }
        match &self.cache {
            Some((_, lines)) => lines,
            None => &[],
        }
    }

    fn max_scroll(&self) -> u16 {
        let total = self
            .cache
            .as_ref()
            .map(|(_, lines)| lines.len() as u16)
            .unwrap_or(0);
        total.saturating_sub(self.visible_height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).max(0) as u16;
        self.scroll = next.min(self.max_scroll());
    }
}

impl Panel for CodePanel {
    fn id(&self) -> PanelId {
        PanelId::CODE
    }

    fn name(&self) -> &str {
        "Example"
    }

    fn handle_input(&mut self, event: &Event, _state: &mut AppState) -> Result<bool> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_by(-1);
                    Ok(true)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_by(1);
                    Ok(true)
                }
                KeyCode::PageUp => {
                    self.scroll_by(-(self.visible_height as i32));
                    Ok(true)
                }
                KeyCode::PageDown => {
                    self.scroll_by(self.visible_height as i32);
                    Ok(true)
                }
                KeyCode::Home => {
                    self.scroll = 0;
                    Ok(true)
                }
                _ => Ok(false),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => {
                    self.scroll_by(-3);
                    Ok(true)
                }
                MouseEventKind::ScrollDown => {
                    self.scroll_by(3);
                    Ok(true)
                }
                _ => Ok(false),
            },
            _ => Ok(false),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
        let border_style = {
            let theme = theme();
            if focused {
                Style::default().fg(theme.border_focused)
            } else {
                Style::default().fg(theme.border_unfocused)
            }
        };

        let block = Block::default()
            .title(" Implementation Example ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        self.visible_height = inner.height;

        let lines = self.lines_for(state).to_vec();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll.min(self.max_scroll()), 0));
        frame.render_widget(paragraph, area);
    }
}
