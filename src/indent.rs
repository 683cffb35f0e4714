//! Auto-indentation on line break
//!
//! The engine looks only at the line the cursor was on when the break was
//! inserted. There is no brace-depth counter: nesting deepens one unit at a
//! time as long as each new line re-triggers the policy.

use serde::Deserialize;

/// Default width of one indentation unit, in spaces
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// How a line signals that the next line opens a nested block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentPolicy {
    /// The trimmed line contains `{` and the line contains no `}`.
    ///
    /// The new indent is the previous line's leading whitespace, copied
    /// verbatim (tabs included), plus one unit.
    #[default]
    BraceContent,
    /// The trimmed line ends with `{`.
    ///
    /// The new indent is rebuilt from spaces only: the number of literal
    /// spaces in the previous line's leading whitespace, plus one unit if
    /// triggered. Tabs in the leading run do not count.
    EndsWithBrace,
}

/// Computes the indentation to insert after a line break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentEngine {
    policy: IndentPolicy,
    width: usize,
}

impl IndentEngine {
    pub fn new(policy: IndentPolicy) -> Self {
        Self {
            policy,
            width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Builder: set the unit width (clamped to 1..=16)
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(1, 16);
        self
    }

    pub fn policy(&self) -> IndentPolicy {
        self.policy
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Indent string for the line following `current_line`
    ///
    /// `current_line` is the full text of the line the cursor was on before
    /// the break. The caller inserts the result after the newline.
    pub fn compute_indent(&self, current_line: &str) -> String {
        let base = leading_whitespace(current_line);
        let trimmed = current_line.trim();

        match self.policy {
            IndentPolicy::BraceContent => {
                let mut indent = base.to_string();
                if trimmed.contains('{') && !current_line.contains('}') {
                    indent.push_str(&" ".repeat(self.width));
                }
                indent
            }
            IndentPolicy::EndsWithBrace => {
                let mut level = base.chars().filter(|&c| c == ' ').count();
                if trimmed.ends_with('{') {
                    level += self.width;
                }
                " ".repeat(level)
            }
        }
    }
}

impl Default for IndentEngine {
    fn default() -> Self {
        Self::new(IndentPolicy::default())
    }
}

/// Leading run of spaces and tabs
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}
