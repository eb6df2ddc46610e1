//! Details panel: description and use cases for the selected pattern

use crate::core::Result;
use crate::events::Event;
use crate::panels::Panel;
use crate::state::{AppState, PanelId};
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Read-only details view
pub struct DetailsPanel;

impl Default for DetailsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for DetailsPanel {
    fn id(&self) -> PanelId {
        PanelId::DETAILS
    }

    fn name(&self) -> &str {
        "Details"
    }

    fn handle_input(&mut self, _event: &Event, _state: &mut AppState) -> Result<bool> {
        // Nothing interactive here
        Ok(false)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
        let theme = theme();
        let pattern = state.selection.selected();

        let border_style = if focused {
            Style::default().fg(theme.border_focused)
        } else {
            Style::default().fg(theme.border_unfocused)
        };

        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let header_style = Style::default()
            .fg(theme.accent_primary)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Description", header_style)),
            Line::from(Span::styled(
                pattern.description,
                Style::default().fg(theme.text_secondary),
            )),
            Line::default(),
            Line::from(Span::styled("Use Cases", header_style)),
        ];

        for use_case in pattern.use_cases {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.accent_primary)),
                Span::styled(*use_case, Style::default().fg(theme.text_secondary)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
