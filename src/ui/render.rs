//! Main rendering orchestration

use crate::panels::{Panel, PanelRegistry};
use crate::state::{AppState, MessageLevel, PanelId};
use crate::ui::layout::get_layout;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the full UI for one frame
pub fn render(frame: &mut Frame, state: &AppState, panels: &mut PanelRegistry) {
    let layout = get_layout(frame.area());
    let focused = state.focus.current();

    panels.selector.render(
        frame,
        layout.selector,
        state,
        focused == PanelId::SELECTOR,
    );
    panels
        .diagram
        .render(frame, layout.diagram, state, focused == PanelId::DIAGRAM);
    panels
        .code
        .render(frame, layout.code, state, focused == PanelId::CODE);
    panels
        .details
        .render(frame, layout.details, state, focused == PanelId::DETAILS);
    panels.principles.render(
        frame,
        layout.principles,
        state,
        focused == PanelId::PRINCIPLES,
    );

    render_status_bar(frame, layout.status, state);
}

/// Render the bottom status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = theme();
    let mut spans = Vec::new();

    // Selected pattern badge
    spans.push(Span::styled(
        format!(" {} ", state.selection.selected().name),
        Style::default()
            .bg(theme.statusbar_pattern_bg)
            .fg(theme.statusbar_pattern_fg)
            .add_modifier(Modifier::BOLD),
    ));

    if state.selection.simulating() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " SIM ",
            Style::default()
                .bg(theme.statusbar_sim_bg)
                .fg(theme.statusbar_sim_fg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(message) = &state.status_message {
        let color = match message.level {
            MessageLevel::Info => theme.status_info,
            MessageLevel::Error => theme.status_error,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.text.clone(),
            Style::default().fg(color),
        ));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "s: Simulate  Tab: Switch  Ctrl+T: Theme  q: Quit",
        Style::default().fg(theme.text_muted),
    ));

    let bar = Line::from(spans).style(Style::default().bg(theme.statusbar_bg));
    frame.render_widget(bar, area);
}
