//! C# grammar

use crate::indent::IndentPolicy;
use crate::syntax::category::Theme;
use crate::syntax::grammar::Grammar;

pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char",
    "checked", "class", "const", "continue", "decimal", "default", "delegate",
    "do", "double", "else", "enum", "event", "explicit", "extern", "false",
    "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in",
    "int", "interface", "internal", "is", "lock", "long", "namespace", "new",
    "null", "object", "operator", "out", "override", "params", "private",
    "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
    "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe",
    "ushort", "using", "virtual", "void", "volatile", "while",
];

/// Create the C# grammar (brace-content indentation)
pub fn csharp_grammar(theme: &Theme) -> Grammar {
    let mut grammar = Grammar::new("csharp");
    grammar.add_extension("cs");
    grammar.set_indent_policy(IndentPolicy::BraceContent);
    super::add_c_family_rules(&mut grammar, CSHARP_KEYWORDS, theme);
    grammar
}
