//! Syntax highlighting
//!
//! Grammars are data: an ordered table of regex rules per language. The
//! highlighter works on one line at a time and keeps no state between
//! lines, so block comments and multi-line strings are not recognized.

mod builtin;
mod category;
mod definition;
mod grammar;
mod registry;
mod rules;
mod style;

pub use builtin::{all_grammars, csharp_grammar, java_grammar, CSHARP_KEYWORDS, JAVA_KEYWORDS};
pub use category::{Category, Theme};
pub use definition::{GrammarDefinition, RuleDefinition};
pub use grammar::Grammar;
pub use registry::GrammarRegistry;
pub use rules::{Rule, GREEDY_STRING, LINE_COMMENT};
pub use style::{Color, Style, StyledSpan};
