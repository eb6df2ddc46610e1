//! Syntax highlighting with syntect
//!
//! Used only to style the static example snippets - the text is never
//! parsed or executed beyond coloring.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::SyntaxSet;

/// Syntax highlighter wrapping syntect's default syntax and theme sets
pub struct Highlighter {
    /// Syntax definitions
    syntax_set: SyntaxSet,

    /// Color themes
    theme_set: ThemeSet,

    /// Current theme name
    theme_name: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a new highlighter
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: "base16-ocean.dark".to_string(),
        }
    }

    /// Highlight a snippet into owned ratatui lines.
    ///
    /// `token` is a syntect syntax token such as "js"; unknown tokens fall
    /// back to plain text.
    pub fn highlight(&self, source: &str, token: &str) -> Vec<Line<'static>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(token)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = match self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        {
            Some(theme) => theme,
            // No themes loaded at all: plain text
            None => {
                return source.lines().map(|l| Line::from(l.to_string())).collect();
            }
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut result = Vec::new();

        for line in source.lines() {
            // Add newline for syntect's line-based parsing
            let line_with_newline = format!("{}\n", line);
            let highlighted = highlighter
                .highlight_line(&line_with_newline, &self.syntax_set)
                .unwrap_or_default();

            let spans: Vec<Span<'static>> = highlighted
                .into_iter()
                .filter_map(|(style, text)| {
                    let text = text.trim_end_matches('\n').to_string();
                    if text.is_empty() {
                        None
                    } else {
                        Some(Span::styled(text, syntect_style_to_ratatui(style)))
                    }
                })
                .collect();

            result.push(Line::from(spans));
        }

        result
    }
}

/// Convert syntect style to ratatui style
fn syntect_style_to_ratatui(style: syntect::highlighting::Style) -> Style {
    let fg = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);

    let mut ratatui_style = Style::default().fg(fg);

    if style.font_style.contains(FontStyle::BOLD) {
        ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        ratatui_style = ratatui_style.add_modifier(Modifier::UNDERLINED);
    }

    ratatui_style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_preserves_line_count() {
        let highlighter = Highlighter::new();
        let source = "class Foo {\n  bar() {}\n}";
        let lines = highlighter.highlight(source, "js");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_unknown_token_falls_back_to_plain() {
        let highlighter = Highlighter::new();
        let lines = highlighter.highlight("hello world", "no-such-syntax");
        assert_eq!(lines.len(), 1);
    }
}
