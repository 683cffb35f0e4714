//! Java grammar

use crate::indent::IndentPolicy;
use crate::syntax::category::Theme;
use crate::syntax::grammar::Grammar;

pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "false", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long", "native",
    "new", "null", "package", "private", "protected", "public", "record",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "true", "try", "var", "void",
    "volatile", "while", "yield",
];

/// Create the Java grammar (ends-with-brace indentation)
pub fn java_grammar(theme: &Theme) -> Grammar {
    let mut grammar = Grammar::new("java");
    grammar.add_extension("java");
    grammar.set_indent_policy(IndentPolicy::EndsWithBrace);
    super::add_c_family_rules(&mut grammar, JAVA_KEYWORDS, theme);
    grammar
}
