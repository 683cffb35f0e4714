//! Built-in grammars
//!
//! Both built-in languages share the C-family layout: one keyword rule,
//! then line comments, then greedy strings. Strings paint last, so they win
//! over comments and keywords wherever they overlap.

mod csharp;
mod java;

use super::category::{Category, Theme};
use super::grammar::Grammar;
use super::rules::{Rule, GREEDY_STRING, LINE_COMMENT};
use crate::error::Result;

pub use csharp::{csharp_grammar, CSHARP_KEYWORDS};
pub use java::{java_grammar, JAVA_KEYWORDS};

/// Get all built-in grammars styled with `theme`
pub fn all_grammars(theme: &Theme) -> Vec<Grammar> {
    vec![csharp_grammar(theme), java_grammar(theme)]
}

/// Append the keyword, comment and string rules, in that order
fn add_c_family_rules(grammar: &mut Grammar, keywords: &[&str], theme: &Theme) {
    let rules = [
        Rule::keywords("keyword", keywords, theme.keyword),
        Rule::new("line_comment", LINE_COMMENT, Category::Comment, theme.comment),
        Rule::new("string", GREEDY_STRING, Category::String, theme.string),
    ];
    for rule in rules {
        push_rule(grammar, rule);
    }
}

fn push_rule(grammar: &mut Grammar, rule: Result<Rule>) {
    match rule {
        Ok(rule) => grammar.add_rule(rule),
        Err(e) => tracing::warn!(grammar = grammar.name(), "dropping built-in rule: {}", e),
    }
}
