//! Style types for text rendering
//!
//! Colors are 24-bit so a theme can carry the exact hex values an editor
//! palette uses.

use std::ops::Range;

use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use super::category::Category;
use crate::error::{Error, Result};

/// Foreground color of a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    /// Whatever the host renders plain text with
    #[default]
    Default,
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse `#RRGGBB` (the leading `#` is optional) or `default`
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("default") {
            return Ok(Color::Default);
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A styled region within one line
///
/// Offsets are byte offsets into the line text and always fall on char
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Byte offset where this span starts
    pub start: usize,
    /// Length of the span in bytes
    pub len: usize,
    /// Style to paint the span with
    pub style: Style,
    /// Category of the rule that painted the span
    pub category: Category,
}

impl StyledSpan {
    /// Create a new span
    pub fn new(start: usize, len: usize, style: Style, category: Category) -> Self {
        Self {
            start,
            len,
            style,
            category,
        }
    }

    /// Byte offset one past the end of the span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Byte range covered by the span
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The slice of `line` this span covers
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.range()).unwrap_or("")
    }

    /// Terminal column range of the span within `line`
    pub fn display_range(&self, line: &str) -> Range<usize> {
        let start = line.get(..self.start).map_or(0, |s| s.width());
        start..start + self.text(line).width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Rgb(1, 2, 3)).with_bold();
        assert_eq!(style.fg, Color::Rgb(1, 2, 3));
        assert!(style.bold);
        assert!(!style.italic);
        assert_ne!(style, Style::default());
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF9D00").unwrap(), Color::Rgb(0xFF, 0x9D, 0x00));
        assert_eq!(Color::from_hex("6a9955").unwrap(), Color::Rgb(0x6A, 0x99, 0x55));
        assert_eq!(Color::from_hex("Default").unwrap(), Color::Default);
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_span_range() {
        let span = StyledSpan::new(5, 5, Style::default(), Category::Keyword);
        assert_eq!(span.end(), 10);
        assert_eq!(span.range(), 5..10);
        assert_eq!(span.text("short"), "");
    }

    #[test]
    fn test_span_display_range() {
        let line = "名前 = \"x\"";
        let start = line.find('"').unwrap();
        let span = StyledSpan::new(start, 3, Style::default(), Category::String);
        assert_eq!(span.text(line), "\"x\"");
        // two double-width chars, a space, '=', a space
        assert_eq!(span.display_range(line), 7..10);
    }
}
