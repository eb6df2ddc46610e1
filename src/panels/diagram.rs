//! Architecture diagram panel
//!
//! Paints the scene built by [`crate::diagram`] onto a braille canvas:
//! segments as lines (reverse halves of bidirectional edges dashed),
//! arrowhead glyphs at segment ends, and centered label boxes overlaid on
//! the node anchors. The simulate toggle swaps in the emphasis style and
//! drives a tick-based pulse; it never changes the geometry.

use crate::core::Result;
use crate::diagram::{build_scene, Scene, Segment};
use crate::events::Event;
use crate::panels::Panel;
use crate::state::{AppState, PanelId};
use crate::ui::theme;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{canvas::Canvas, Block, Borders, Paragraph},
    Frame,
};
use std::cell::RefCell;
use unicode_width::UnicodeWidthStr;

/// Number of alternating on/off pieces a dashed segment is split into
const DASH_PIECES: usize = 9;

/// Diagram panel with simulation styling
pub struct DiagramPanel {
    /// Animation phase, advanced once per tick
    phase: u8,

    /// Inner drawing area for mouse click detection
    canvas_area: RefCell<Rect>,
}

impl Default for DiagramPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramPanel {
    /// Create a new diagram panel
    pub fn new() -> Self {
        Self {
            phase: 0,
            canvas_area: RefCell::new(Rect::default()),
        }
    }

    /// Advance the pulse animation by one tick
    pub fn on_tick(&mut self) {
        self.phase = self.phase.wrapping_add(1);
    }

    /// Color for edges and arrowheads under the current styling
    fn edge_color(&self, simulating: bool) -> Color {
        let theme = theme();
        if simulating {
            // Pulse between bright and dim emphasis
            if self.phase % 2 == 0 {
                theme.edge_active
            } else {
                theme.edge_active_dim
            }
        } else {
            theme.edge_neutral
        }
    }

    /// Draw one segment on the canvas, dashed segments piecewise
    fn draw_segment(
        ctx: &mut ratatui::widgets::canvas::Context<'_>,
        seg: &Segment,
        color: Color,
    ) {
        // Canvas y axis points up; diagram y points down
        let (x1, y1) = (seg.x1, 100.0 - seg.y1);
        let (x2, y2) = (seg.x2, 100.0 - seg.y2);

        if seg.dashed {
            for i in (0..DASH_PIECES).step_by(2) {
                let t0 = i as f64 / DASH_PIECES as f64;
                let t1 = (i + 1) as f64 / DASH_PIECES as f64;
                ctx.draw(&ratatui::widgets::canvas::Line {
                    x1: x1 + (x2 - x1) * t0,
                    y1: y1 + (y2 - y1) * t0,
                    x2: x1 + (x2 - x1) * t1,
                    y2: y1 + (y2 - y1) * t1,
                    color,
                });
            }
        } else {
            ctx.draw(&ratatui::widgets::canvas::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }

    /// Overlay one node label box, centered on its anchor
    fn render_node_box(
        &self,
        frame: &mut Frame,
        inner: Rect,
        node: &crate::diagram::NodeBox,
        simulating: bool,
    ) {
        let theme = theme();
        let lines: Vec<&str> = node.label.split('\n').collect();
        let box_width = (lines.iter().map(|l| l.width()).max().unwrap_or(0) + 2) as u16;
        let box_height = lines.len() as u16;

        if inner.width < box_width || inner.height < box_height {
            return;
        }

        let anchor_x = inner.x + ((node.x / 100.0) * (inner.width - 1) as f64).round() as u16;
        let anchor_y = inner.y + ((node.y / 100.0) * (inner.height - 1) as f64).round() as u16;

        // Box center sits on the anchor, clamped into the drawing area
        let mut x0 = anchor_x.saturating_sub(box_width / 2);
        let mut y0 = anchor_y.saturating_sub(box_height / 2);
        x0 = x0.clamp(inner.x, inner.x + inner.width - box_width);
        y0 = y0.clamp(inner.y, inner.y + inner.height - box_height);

        // Small bounce while simulating
        if simulating && self.phase % 2 == 1 && y0 > inner.y {
            y0 -= 1;
        }

        let style = Style::default()
            .bg(theme.token_color(node.color))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text: Vec<Line> = lines.iter().map(|l| Line::from(l.to_string())).collect();

        let rect = Rect::new(x0, y0, box_width, box_height);
        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .alignment(ratatui::layout::Alignment::Center),
            rect,
        );
    }

    /// Paint scene edges and arrowheads onto the canvas
    fn paint_scene(ctx: &mut ratatui::widgets::canvas::Context<'_>, scene: &Scene, color: Color) {
        for seg in &scene.segments {
            Self::draw_segment(ctx, seg, color);
        }

        ctx.layer();

        for seg in &scene.segments {
            let arrow = Span::styled(seg.arrow().to_string(), Style::default().fg(color));
            ctx.print(seg.x2, 100.0 - seg.y2, Line::from(arrow));
        }
    }
}

impl Panel for DiagramPanel {
    fn id(&self) -> PanelId {
        PanelId::DIAGRAM
    }

    fn name(&self) -> &str {
        "Diagram"
    }

    fn handle_input(&mut self, event: &Event, state: &mut AppState) -> Result<bool> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Enter => {
                    state.selection.toggle_simulation();
                    Ok(true)
                }
                _ => Ok(false),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let area = *self.canvas_area.borrow();
                    if area.contains((mouse.column, mouse.row).into()) {
                        state.selection.toggle_simulation();
                        Ok(true)
                    } else {
                        Ok(false)
                    }
                }
                _ => Ok(false),
            },
            _ => Ok(false),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
        let simulating = state.selection.simulating();

        let (border_style, toggle_label) = {
            let theme = theme();
            let border_style = if focused {
                Style::default().fg(theme.border_focused)
            } else {
                Style::default().fg(theme.border_unfocused)
            };
            let toggle_label = if simulating {
                Span::styled(
                    " ■ Stop (s) ",
                    Style::default()
                        .fg(theme.status_error)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    " ▶ Simulate (s) ",
                    Style::default().fg(theme.accent_primary),
                )
            };
            (border_style, toggle_label)
        };

        let block = Block::default()
            .title(" Architecture Diagram ")
            .title_top(Line::from(toggle_label).right_aligned())
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        *self.canvas_area.borrow_mut() = inner;

        if inner.width < 4 || inner.height < 4 {
            return;
        }

        let scene = build_scene(&state.selection.selected().diagram);
        let color = self.edge_color(simulating);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(|ctx| Self::paint_scene(ctx, &scene, color));
        frame.render_widget(canvas, inner);

        for node in &scene.boxes {
            self.render_node_box(frame, inner, node, simulating);
        }
    }
}
