//! Grammar files
//!
//! Extra languages are described in TOML and turned into a [`Grammar`] at
//! load time:
//!
//! ```toml
//! name = "kotlin"
//! extensions = ["kt", "kts"]
//! indent = "ends-with-brace"
//!
//! [[rules]]
//! category = "keyword"
//! keywords = ["fun", "val", "var", "class"]
//!
//! [[rules]]
//! category = "comment"
//! pattern = "//[^\n]*"
//! style = { fg = "#808080", italic = true }
//! ```
//!
//! Rules keep file order, which is also paint order.

use serde::Deserialize;

use super::category::{Category, Theme};
use super::grammar::Grammar;
use super::rules::Rule;
use super::style::Style;
use crate::error::{Error, Result};
use crate::indent::IndentPolicy;

/// A grammar as written in a grammar file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarDefinition {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub indent: IndentPolicy,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// One rule of a grammar file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub name: Option<String>,
    pub category: Category,
    pub pattern: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Overrides the theme style for this rule
    pub style: Option<Style>,
}

impl GrammarDefinition {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Compile every rule; styles not given in the file come from `theme`
    pub fn build(&self, theme: &Theme) -> Result<Grammar> {
        let mut grammar = Grammar::new(&self.name);
        for ext in &self.extensions {
            grammar.add_extension(ext);
        }
        grammar.set_indent_policy(self.indent);

        for (idx, def) in self.rules.iter().enumerate() {
            let name = def
                .name
                .clone()
                .unwrap_or_else(|| format!("{}#{}", def.category.name(), idx));
            let style = def.style.unwrap_or_else(|| theme.style_for(def.category));

            let rule = match (&def.pattern, def.keywords.is_empty()) {
                (Some(pattern), true) => Rule::new(&name, pattern, def.category, style)?,
                (Some(_), false) => {
                    return Err(Error::InvalidRule {
                        rule: name,
                        reason: "both `pattern` and `keywords` are set",
                    })
                }
                (None, false) if def.category != Category::Keyword => {
                    return Err(Error::InvalidRule {
                        rule: name,
                        reason: "`keywords` requires category \"keyword\"",
                    })
                }
                (None, false) => Rule::keywords(&name, &def.keywords, style)?,
                (None, true) => return Err(Error::EmptyRule(name)),
            };
            grammar.add_rule(rule);
        }

        Ok(grammar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::Color;

    const KOTLIN: &str = r##"
name = "kotlin"
extensions = ["kt", ".kts"]
indent = "ends-with-brace"

[[rules]]
category = "keyword"
keywords = ["fun", "val"]

[[rules]]
name = "comment"
category = "comment"
pattern = "//[^\n]*"
style = { fg = "#808080", italic = true }
"##;

    #[test]
    fn test_parse_and_build() {
        let def = GrammarDefinition::from_toml_str(KOTLIN).unwrap();
        let grammar = def.build(&Theme::default()).unwrap();

        assert_eq!(grammar.name(), "kotlin");
        assert_eq!(grammar.extensions(), ["kt", "kts"]);
        assert_eq!(grammar.indent_policy(), IndentPolicy::EndsWithBrace);
        assert_eq!(grammar.rules().len(), 2);
        assert_eq!(grammar.rules()[0].name(), "keyword#0");
        assert_eq!(grammar.rules()[0].style(), Theme::default().keyword);
        assert_eq!(grammar.rules()[1].style().fg, Color::Rgb(0x80, 0x80, 0x80));
        assert!(grammar.rules()[1].style().italic);
    }

    #[test]
    fn test_defaults() {
        let def = GrammarDefinition::from_toml_str(r#"name = "plain""#).unwrap();
        assert_eq!(def.indent, IndentPolicy::BraceContent);
        assert!(def.build(&Theme::default()).unwrap().rules().is_empty());
    }

    #[test]
    fn test_rule_without_pattern() {
        let def = GrammarDefinition::from_toml_str(
            r#"
name = "bad"
[[rules]]
name = "hollow"
category = "string"
"#,
        )
        .unwrap();
        let err = def.build(&Theme::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyRule(name) if name == "hollow"));
    }

    #[test]
    fn test_pattern_and_keywords_rejected() {
        let def = GrammarDefinition::from_toml_str(
            r#"
name = "bad"
[[rules]]
category = "keyword"
pattern = "fun"
keywords = ["val"]
"#,
        )
        .unwrap();
        let err = def.build(&Theme::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidRule { rule, .. } if rule == "keyword#0"));
    }

    #[test]
    fn test_keywords_need_keyword_category() {
        let def = GrammarDefinition::from_toml_str(
            r#"
name = "bad"
[[rules]]
name = "literals"
category = "string"
keywords = ["null", "true"]
"#,
        )
        .unwrap();
        let err = def.build(&Theme::default()).unwrap_err();
        assert!(matches!(&err, Error::InvalidRule { rule, .. } if rule == "literals"));
        assert!(err.to_string().contains("category \"keyword\""));
    }

    #[test]
    fn test_bad_regex() {
        let def = GrammarDefinition::from_toml_str(
            r#"
name = "bad"
[[rules]]
category = "string"
pattern = "[unclosed"
"#,
        )
        .unwrap();
        assert!(matches!(
            def.build(&Theme::default()),
            Err(Error::Pattern { rule, .. }) if rule == "string#0"
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = GrammarDefinition::from_toml_str(
            r#"
name = "bad"
[[rules]]
category = "number"
pattern = "\\d+"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = GrammarDefinition::from_toml_str(
            r##"
name = "bad"
[[rules]]
category = "comment"
pattern = "#.*"
style = { fg = "green" }
"##,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
