//! Named text styles backed by ANSI escapes.

use owo_colors::OwoColorize;

/// Closed set of named presentation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Bright,
    Dim,
}

impl Style {
    /// Resolves a style name; `None` when the name is not recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "bright" | "bold" => Some(Self::Bright),
            "dim" | "muted" => Some(Self::Dim),
            _ => None,
        }
    }

    /// Wraps `text` in this style's escape sequence.
    pub fn paint(self, text: &str) -> String {
        match self {
            Self::Red => text.red().to_string(),
            Self::Green => text.green().to_string(),
            Self::Yellow => text.yellow().to_string(),
            Self::Blue => text.blue().to_string(),
            Self::Magenta => text.magenta().to_string(),
            Self::Cyan => text.cyan().to_string(),
            Self::Bright => text.bold().to_string(),
            Self::Dim => text.dimmed().to_string(),
        }
    }
}

/// Applies a named style, passing text through unchanged for unknown names.
pub fn apply_style(text: &str, style_name: &str) -> String {
    match Style::from_name(style_name) {
        Some(style) => style.paint(text),
        None => text.to_string(),
    }
}

/// Whether styled output should carry escape sequences at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
}

/// Style applier bound to a color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    mode: ColorMode,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        match self.mode {
            ColorMode::Always => style.paint(text),
            ColorMode::Never => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_style, ColorMode, Palette, Style};

    #[test]
    fn unknown_style_passes_text_through() {
        assert_eq!(apply_style("hello", "sparkly"), "hello");
        assert_eq!(apply_style("", ""), "");
    }

    #[test]
    fn known_style_wraps_text_in_escapes() {
        let styled = apply_style("hello", "Cyan");
        assert!(styled.starts_with("\u{1b}["));
        assert!(styled.contains("hello"));
        assert!(styled.ends_with("\u{1b}[0m") || styled.ends_with("\u{1b}[39m"));
    }

    #[test]
    fn plain_palette_never_emits_escapes() {
        let palette = Palette::new(ColorMode::Never);
        assert_eq!(palette.paint("row", Style::Dim), "row");

        let colored = Palette::new(ColorMode::Always);
        assert_ne!(colored.paint("row", Style::Dim), "row");
    }
}
