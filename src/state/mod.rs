//! Application state: selection, focus, status

mod app;
mod focus;
mod selection;

pub use app::{AppState, MessageLevel, StatusMessage};
pub use focus::{FocusState, PanelId};
pub use selection::Selection;
