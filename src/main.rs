//! agentmap entry point
//!
//! Sets up the terminal, spawns the input and tick producer threads, and
//! runs the synchronous event loop.

use agentmap::config::load_config;
use agentmap::core::Result;
use agentmap::events::{Event, EventBus};
use agentmap::panels::{Panel, PanelRegistry};
use agentmap::state::AppState;
use agentmap::ui::{self, get_layout, set_theme, toggle_theme, ThemeVariant};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEventKind, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossbeam_channel::Sender;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let mut state = AppState::new();
    let config = match load_config(Path::new(".")) {
        Ok(config) => config,
        Err(err) => {
            // Broken preferences must not prevent startup
            state.error(format!("Config ignored: {err}"));
            agentmap::config::AgentmapConfig::default()
        }
    };
    set_theme(ThemeVariant::from_str(&config.ui.theme));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state, config.ui.tick_rate_ms);

    // Always restore the terminal, even if the app errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Forward crossterm input events onto the bus
fn spawn_input_reader(tx: Sender<Event>) {
    thread::spawn(move || loop {
        if let Ok(true) = crossterm::event::poll(Duration::from_millis(100)) {
            let forwarded = match crossterm::event::read() {
                Ok(crossterm::event::Event::Key(key)) => tx.send(Event::Key(key)),
                Ok(crossterm::event::Event::Mouse(mouse)) => tx.send(Event::Mouse(mouse)),
                Ok(crossterm::event::Event::Resize(w, h)) => tx.send(Event::Resize(w, h)),
                _ => Ok(()),
            };
            if forwarded.is_err() {
                break;
            }
        }
    });
}

/// Emit a tick at the configured rate to drive the pulse animation
fn spawn_ticker(tx: Sender<Event>, tick_rate_ms: u64) {
    thread::spawn(move || loop {
        thread::sleep(Duration::from_millis(tick_rate_ms));
        if tx.send(Event::Tick).is_err() {
            break;
        }
    });
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    tick_rate_ms: u64,
) -> Result<()> {
    let bus = EventBus::new(1024);
    spawn_input_reader(bus.sender());
    spawn_ticker(bus.sender(), tick_rate_ms.max(16));

    let mut panels = PanelRegistry::new();
    let size = terminal.size()?;
    let mut screen_area = Rect::new(0, 0, size.width, size.height);

    loop {
        terminal.draw(|frame| ui::render(frame, state, &mut panels))?;

        if let Some(event) = bus.recv_timeout(Duration::from_millis(50)) {
            handle_event(&event, state, &mut panels, &mut screen_area)?;
            // Batch whatever queued up while drawing
            for event in bus.drain(50) {
                handle_event(&event, state, &mut panels, &mut screen_area)?;
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

/// Dispatch one event: global bindings first, then the focused panel
fn handle_event(
    event: &Event,
    state: &mut AppState,
    panels: &mut PanelRegistry,
    screen_area: &mut Rect,
) -> Result<()> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match key.code {
                KeyCode::Char('q') => {
                    state.quit();
                    return Ok(());
                }
                KeyCode::Tab => {
                    state.focus.next();
                    return Ok(());
                }
                KeyCode::BackTab => {
                    state.focus.prev();
                    return Ok(());
                }
                KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    toggle_theme();
                    state.info(format!(
                        "Theme: {}",
                        agentmap::ui::current_variant().as_str()
                    ));
                    return Ok(());
                }
                KeyCode::Char('s') => {
                    state.selection.toggle_simulation();
                    if state.selection.simulating() {
                        state.info("Simulating message flow");
                    } else {
                        state.info("Simulation stopped");
                    }
                    return Ok(());
                }
                _ => {}
            }

            let focused = state.focus.current();
            panels.get_mut(focused).handle_input(event, state)?;
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = get_layout(*screen_area);
                if let Some(id) = layout.panel_at(mouse.column, mouse.row) {
                    state.focus.focus(id);
                    panels.get_mut(id).handle_input(event, state)?;
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                // Scroll goes to the panel under the cursor, not the focused one
                let layout = get_layout(*screen_area);
                if let Some(id) = layout.panel_at(mouse.column, mouse.row) {
                    panels.get_mut(id).handle_input(event, state)?;
                }
            }
            _ => {}
        },
        Event::Resize(width, height) => {
            *screen_area = Rect::new(0, 0, *width, *height);
        }
        Event::Tick => {
            panels.diagram.on_tick();
        }
    }

    Ok(())
}
