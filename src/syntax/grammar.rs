//! Grammars and the line highlighter
//!
//! A [`Grammar`] is an ordered list of rules for one language plus the
//! indent policy that language uses. Highlighting paints every match of
//! every rule in table order onto the line, so where two rules overlap the
//! later one wins.

use super::rules::Rule;
use super::style::StyledSpan;
use crate::indent::{IndentEngine, IndentPolicy};

/// A complete language definition
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Language name (e.g. "csharp", "java")
    name: String,
    /// File extensions without the dot
    extensions: Vec<String>,
    /// Rules in evaluation order
    rules: Vec<Rule>,
    indent: IndentPolicy,
}

impl Grammar {
    /// Create a new empty grammar
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
            indent: IndentPolicy::default(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.trim_start_matches('.').to_string());
    }

    /// Append a rule; it paints over every rule added before it
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn set_indent_policy(&mut self, policy: IndentPolicy) {
        self.indent = policy;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn indent_policy(&self) -> IndentPolicy {
        self.indent
    }

    /// Indent engine for this grammar's policy with a unit of `width` spaces
    pub fn indent_engine(&self, width: usize) -> IndentEngine {
        IndentEngine::new(self.indent).with_width(width)
    }

    /// Highlight a single line of text
    ///
    /// Returns the painted regions sorted by offset. Each call is
    /// independent: nothing is carried over from previous lines or calls.
    pub fn highlight(&self, text: &str) -> Vec<StyledSpan> {
        if text.is_empty() || self.rules.is_empty() {
            return Vec::new();
        }

        // Index of the rule that last painted each byte
        let mut paint: Vec<Option<usize>> = vec![None; text.len()];
        for (idx, rule) in self.rules.iter().enumerate() {
            for range in rule.matches(text) {
                paint[range].fill(Some(idx));
            }
        }

        let mut spans = Vec::new();
        let mut pos = 0;
        while pos < paint.len() {
            let Some(idx) = paint[pos] else {
                pos += 1;
                continue;
            };
            let start = pos;
            while pos < paint.len() && paint[pos] == Some(idx) {
                pos += 1;
            }
            let rule = &self.rules[idx];
            spans.push(StyledSpan::new(start, pos - start, rule.style(), rule.category()));
        }

        tracing::trace!(grammar = %self.name, spans = spans.len(), "highlighted line");
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::category::Category;
    use crate::syntax::rules::{GREEDY_STRING, LINE_COMMENT};
    use crate::syntax::style::{Color, Style};

    fn create_test_grammar() -> Grammar {
        let mut grammar = Grammar::new("test");
        grammar.add_extension(".test");
        grammar.add_rule(Rule::keywords("keyword", ["int", "return"], Style::fg(Color::Rgb(1, 0, 0))).unwrap());
        grammar.add_rule(Rule::new("comment", LINE_COMMENT, Category::Comment, Style::fg(Color::Rgb(0, 1, 0))).unwrap());
        grammar.add_rule(Rule::new("string", GREEDY_STRING, Category::String, Style::fg(Color::Rgb(0, 0, 1))).unwrap());
        grammar
    }

    fn summary(spans: &[StyledSpan]) -> Vec<(usize, usize, Category)> {
        spans.iter().map(|s| (s.start, s.len, s.category)).collect()
    }

    #[test]
    fn test_extension_dot_stripped() {
        assert_eq!(create_test_grammar().extensions(), ["test"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(create_test_grammar().highlight("").is_empty());
    }

    #[test]
    fn test_no_rules() {
        assert!(Grammar::new("plain").highlight("int x;").is_empty());
    }

    #[test]
    fn test_keywords_and_comment() {
        let spans = create_test_grammar().highlight("int x; // return");
        assert_eq!(
            summary(&spans),
            vec![(0, 3, Category::Keyword), (7, 9, Category::Comment)]
        );
    }

    #[test]
    fn test_later_rule_overwrites_middle() {
        // The string paints over the middle of the comment, splitting it.
        let spans = create_test_grammar().highlight(r#"// say "hi" now"#);
        assert_eq!(
            summary(&spans),
            vec![
                (0, 7, Category::Comment),
                (7, 4, Category::String),
                (11, 4, Category::Comment),
            ]
        );
    }

    #[test]
    fn test_multibyte_text() {
        let line = "int ü = \"é\";";
        let spans = create_test_grammar().highlight(line);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].text(line), "\"é\"");
    }

    #[test]
    fn test_adjacent_matches_of_one_rule_merge() {
        let mut grammar = Grammar::new("numbers");
        grammar.add_rule(Rule::new("digit", r"\d", Category::String, Style::default()).unwrap());
        grammar.add_rule(Rule::new("letter", "[a-z]", Category::String, Style::default()).unwrap());

        // three single-char matches of `digit` touch, so they form one span
        assert_eq!(summary(&grammar.highlight("123")), vec![(0, 3, Category::String)]);
        assert_eq!(
            summary(&grammar.highlight("1 2")),
            vec![(0, 1, Category::String), (2, 1, Category::String)]
        );
        // touching runs of different rules stay apart
        assert_eq!(
            summary(&grammar.highlight("12ab")),
            vec![(0, 2, Category::String), (2, 2, Category::String)]
        );
    }
}
