//! Lexical categories and the theme that styles them

use serde::Deserialize;

use super::style::{Color, Style};

/// Lexical categories a grammar rule can recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Language keywords (if, class, return, ...)
    Keyword,
    /// Line comments (`// ...`)
    Comment,
    /// String literals (`"..."`)
    String,
}

impl Category {
    /// Get the name used in grammar files
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Comment => "comment",
            Category::String => "string",
        }
    }
}

/// Category to style mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub keyword: Style,
    pub comment: Style,
    pub string: Style,
}

impl Theme {
    pub fn style_for(&self, category: Category) -> Style {
        match category {
            Category::Keyword => self.keyword,
            Category::Comment => self.comment,
            Category::String => self.string,
        }
    }
}

impl Default for Theme {
    /// Dark editor palette
    fn default() -> Self {
        Self {
            keyword: Style::fg(Color::Rgb(0xFF, 0x9D, 0x00)).with_bold(),
            comment: Style::fg(Color::Rgb(0x6A, 0x99, 0x55)),
            string: Style::fg(Color::Rgb(0xCE, 0x91, 0x78)),
        }
    }
}
