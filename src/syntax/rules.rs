//! Pattern rules for syntax highlighting
//!
//! A rule pairs one regex with the category and style it paints. Rules only
//! ever see a single line, so nothing here can span lines.

use std::ops::Range;

use regex::Regex;

use super::category::Category;
use super::style::Style;
use crate::error::{Error, Result};

/// Line comment: `//` up to the end of the line.
///
/// A `//` inside a string literal still starts a comment here.
pub const LINE_COMMENT: &str = r"//[^\n]*";

/// Double-quoted string, greedy.
///
/// Matches from the first quote to the *last* quote on the line, so two
/// literals on one line come out as a single span. An unterminated literal
/// does not match at all.
pub const GREEDY_STRING: &str = r#"".*""#;

/// A single-line pattern rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging and error messages
    name: String,
    /// Compiled regex pattern
    pattern: Regex,
    category: Category,
    style: Style,
}

impl Rule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, category: Category, style: Style) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::Pattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            category,
            style,
        })
    }

    /// Create a keyword rule matching any of `words` as a whole word
    pub fn keywords<I, S>(name: &str, words: I, style: Style) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(|w| regex::escape(w.as_ref()))
            .collect();
        if alternatives.is_empty() {
            return Err(Error::EmptyRule(name.to_string()));
        }
        let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
        Self::new(name, &pattern, Category::Keyword, style)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// All non-overlapping matches in `text`, left to right
    ///
    /// Each search resumes right after the previous match. Empty matches are
    /// dropped since they paint nothing.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.pattern
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
    }
}
