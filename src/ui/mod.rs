//! UI rendering: layout, theme, frame orchestration

pub mod layout;
pub mod render;
pub mod theme;

pub use layout::{get_layout, AppLayout};
pub use render::render;
pub use theme::{current_variant, set_theme, theme, toggle_theme, Theme, ThemeVariant};
