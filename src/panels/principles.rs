//! Design principles panel
//!
//! Static reference content: the four design principles followed by the
//! do/don't best-practice lists. Scrollable, otherwise inert.

use crate::catalog;
use crate::core::Result;
use crate::events::Event;
use crate::panels::Panel;
use crate::state::{AppState, PanelId};
use crate::ui::theme;
use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Scrollable view over principles and best practices
pub struct PrinciplesPanel {
    /// Vertical scroll offset
    scroll: u16,

    /// Visible height from the last render, for scroll clamping
    visible_height: u16,
}

impl Default for PrinciplesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PrinciplesPanel {
    /// Create a new principles panel
    pub fn new() -> Self {
        Self {
            scroll: 0,
            visible_height: 0,
        }
    }

    fn content_lines() -> Vec<Line<'static>> {
        let theme = theme();

        let header_style = Style::default()
            .fg(theme.accent_primary)
            .add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(theme.text_secondary);

        let mut lines = Vec::new();

        for principle in catalog::principles() {
            lines.push(Line::from(Span::styled(principle.title, header_style)));
            for point in principle.points {
                lines.push(Line::from(vec![
                    Span::styled("→ ", Style::default().fg(theme.text_muted)),
                    Span::styled(*point, body_style),
                ]));
            }
            lines.push(Line::default());
        }

        let practices = catalog::best_practices();

        lines.push(Line::from(Span::styled(
            "✓ Do",
            Style::default()
                .fg(theme.status_success)
                .add_modifier(Modifier::BOLD),
        )));
        for item in practices.dos {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.status_success)),
                Span::styled(*item, body_style),
            ]));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "✗ Don't",
            Style::default()
                .fg(theme.status_error)
                .add_modifier(Modifier::BOLD),
        )));
        for item in practices.donts {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.status_error)),
                Span::styled(*item, body_style),
            ]));
        }

        lines
    }

    fn max_scroll(&self) -> u16 {
        (Self::content_lines().len() as u16).saturating_sub(self.visible_height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).max(0) as u16;
        self.scroll = next.min(self.max_scroll());
    }
}

impl Panel for PrinciplesPanel {
    fn id(&self) -> PanelId {
        PanelId::PRINCIPLES
    }

    fn name(&self) -> &str {
        "Principles"
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

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState, focused: bool) {
        let border_style = {
            let theme = theme();
            if focused {
                Style::default().fg(theme.border_focused)
            } else {
                Style::default().fg(theme.border_unfocused)
            }
        };

        let block = Block::default()
            .title(" Design Principles ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        self.visible_height = inner.height;

        let paragraph = Paragraph::new(Self::content_lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.min(self.max_scroll()), 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_covers_principles_and_practices() {
        let lines = PrinciplesPanel::content_lines();
        let text: Vec<String> = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect();

        for principle in catalog::principles() {
            assert!(text.iter().any(|l| l.contains(principle.title)));
        }
        assert!(text.iter().any(|l| l.contains("✓ Do")));
        assert!(text.iter().any(|l| l.contains("✗ Don't")));
    }
}
