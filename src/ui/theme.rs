//! Theme system for light/dark mode support
//!
//! All semantic colors live here, including the resolution of catalog
//! color tokens to concrete node colors.

use crate::catalog::ColorToken;
use parking_lot::RwLock;
use ratatui::style::Color;
use std::sync::LazyLock;

/// All semantic colors used throughout the UI
#[derive(Debug, Clone)]
pub struct Theme {
    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Borders
    pub border_focused: Color,
    pub border_unfocused: Color,

    // Accents
    pub accent_primary: Color,

    // Status
    pub status_info: Color,
    pub status_error: Color,
    pub status_success: Color,

    // Diagram edges
    pub edge_neutral: Color,
    pub edge_active: Color,
    pub edge_active_dim: Color,

    // Selection highlight in lists
    pub bg_selection: Color,

    // Status bar
    pub statusbar_bg: Color,
    pub statusbar_pattern_bg: Color,
    pub statusbar_pattern_fg: Color,
    pub statusbar_sim_bg: Color,
    pub statusbar_sim_fg: Color,
}

/// Theme variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ThemeVariant::Light,
            _ => ThemeVariant::Dark,
        }
    }
}

impl Theme {
    /// Dark theme - optimized for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            border_focused: Color::Cyan,
            border_unfocused: Color::DarkGray,

            accent_primary: Color::Cyan,

            status_info: Color::Cyan,
            status_error: Color::Red,
            status_success: Color::Green,

            // Neutral slate for idle edges, cyan pulse while simulating
            edge_neutral: Color::Rgb(71, 85, 105),
            edge_active: Color::Rgb(34, 211, 238),
            edge_active_dim: Color::Rgb(14, 116, 144),

            bg_selection: Color::Rgb(50, 50, 70),

            statusbar_bg: Color::Black,
            statusbar_pattern_bg: Color::Blue,
            statusbar_pattern_fg: Color::White,
            statusbar_sim_bg: Color::Magenta,
            statusbar_sim_fg: Color::White,
        }
    }

    /// Light theme - optimized for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            text_primary: Color::Rgb(20, 20, 30),
            text_secondary: Color::Rgb(50, 50, 70),
            text_muted: Color::Rgb(90, 90, 110),

            border_focused: Color::Rgb(30, 90, 160),
            border_unfocused: Color::Rgb(140, 140, 160),

            accent_primary: Color::Rgb(20, 80, 150),

            status_info: Color::Rgb(20, 80, 150),
            status_error: Color::Rgb(180, 30, 30),
            status_success: Color::Rgb(20, 120, 20),

            edge_neutral: Color::Rgb(120, 130, 150),
            edge_active: Color::Rgb(8, 145, 178),
            edge_active_dim: Color::Rgb(100, 170, 190),

            bg_selection: Color::Rgb(180, 200, 230),

            statusbar_bg: Color::Rgb(225, 225, 235),
            statusbar_pattern_bg: Color::Rgb(30, 90, 160),
            statusbar_pattern_fg: Color::White,
            statusbar_sim_bg: Color::Rgb(120, 40, 120),
            statusbar_sim_fg: Color::White,
        }
    }

    /// Concrete background color for a node color token
    pub fn token_color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Purple => Color::Rgb(147, 51, 234),
            ColorToken::Blue => Color::Rgb(59, 130, 246),
            ColorToken::Green => Color::Rgb(34, 197, 94),
            ColorToken::Orange => Color::Rgb(249, 115, 22),
            ColorToken::Red => Color::Rgb(239, 68, 68),
            ColorToken::Cyan => Color::Rgb(6, 182, 212),
        }
    }
}

// Global theme state
struct ThemeState {
    theme: Theme,
    variant: ThemeVariant,
}

static THEME_STATE: LazyLock<RwLock<ThemeState>> = LazyLock::new(|| {
    RwLock::new(ThemeState {
        theme: Theme::dark(),
        variant: ThemeVariant::Dark,
    })
});

/// Get a read guard to the current theme
pub fn theme() -> parking_lot::MappedRwLockReadGuard<'static, Theme> {
    parking_lot::RwLockReadGuard::map(THEME_STATE.read(), |state| &state.theme)
}

/// Get the current theme variant
pub fn current_variant() -> ThemeVariant {
    THEME_STATE.read().variant
}

/// Set the theme to a specific variant
pub fn set_theme(variant: ThemeVariant) {
    let mut state = THEME_STATE.write();
    state.variant = variant;
    state.theme = match variant {
        ThemeVariant::Dark => Theme::dark(),
        ThemeVariant::Light => Theme::light(),
    };
}

/// Toggle between light and dark themes
pub fn toggle_theme() {
    let next = match current_variant() {
        ThemeVariant::Dark => ThemeVariant::Light,
        ThemeVariant::Light => ThemeVariant::Dark,
    };
    set_theme(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        set_theme(ThemeVariant::Dark);
        assert_eq!(current_variant(), ThemeVariant::Dark);

        toggle_theme();
        assert_eq!(current_variant(), ThemeVariant::Light);

        toggle_theme();
        assert_eq!(current_variant(), ThemeVariant::Dark);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(ThemeVariant::from_str("dark"), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::from_str("light"), ThemeVariant::Light);
        assert_eq!(ThemeVariant::from_str("LIGHT"), ThemeVariant::Light);
        assert_eq!(ThemeVariant::from_str("unknown"), ThemeVariant::Dark);
    }

    #[test]
    fn test_token_colors_distinct() {
        let theme = Theme::dark();
        let tokens = [
            ColorToken::Purple,
            ColorToken::Blue,
            ColorToken::Green,
            ColorToken::Orange,
            ColorToken::Red,
            ColorToken::Cyan,
        ];
        for (i, a) in tokens.iter().enumerate() {
            for b in &tokens[i + 1..] {
                assert_ne!(theme.token_color(*a), theme.token_color(*b));
            }
        }
    }
}
