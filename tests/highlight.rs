use pretty_assertions::assert_eq;

use codelight::syntax::{csharp_grammar, java_grammar, Category, Grammar, StyledSpan, Theme};

fn csharp() -> Grammar {
    csharp_grammar(&Theme::default())
}

fn summary(spans: &[StyledSpan]) -> Vec<(usize, usize, Category)> {
    spans.iter().map(|s| (s.start, s.len, s.category)).collect()
}

#[test]
fn test_no_matches_no_spans() {
    for line in ["", "   ", "x = y + 1;", "Console.WriteLine(x);", "integer interior"] {
        assert!(csharp().highlight(line).is_empty(), "{line:?}");
    }
}

#[test]
fn test_single_keyword() {
    let line = "  return  ";
    let spans = csharp().highlight(line);
    assert_eq!(summary(&spans), vec![(2, 6, Category::Keyword)]);
    assert_eq!(spans[0].style, Theme::default().keyword);
    assert_eq!(spans[0].text(line), "return");
}

#[test]
fn test_comment_overwrites_keyword() {
    let line = "// int x = 5;";
    let spans = csharp().highlight(line);
    assert_eq!(summary(&spans), vec![(0, line.len(), Category::Comment)]);
    assert_eq!(spans[0].style, Theme::default().comment);
}

#[test]
fn test_greedy_string_spans_both_literals() {
    let line = r#"string a = "foo"; string b = "bar";"#;
    let spans = csharp().highlight(line);

    let first = line.find('"').unwrap();
    let last = line.rfind('"').unwrap();
    let strings: Vec<_> = spans.iter().filter(|s| s.category == Category::String).collect();
    assert_eq!(strings.len(), 1);
    assert_eq!(strings[0].range(), first..last + 1);
    assert_eq!(strings[0].text(line), r#""foo"; string b = "bar""#);

    // only the leading keyword survives outside the string
    assert_eq!(summary(&spans), vec![(0, 6, Category::Keyword), (first, last + 1 - first, Category::String)]);
}

#[test]
fn test_unterminated_string() {
    let line = r#"string s = "open; return"#;
    let spans = csharp().highlight(line);
    let ret = line.find("return").unwrap();
    assert_eq!(
        summary(&spans),
        vec![(0, 6, Category::Keyword), (ret, 6, Category::Keyword)]
    );
}

#[test]
fn test_comment_inside_string() {
    // strings paint after comments, so the literal is restored but the
    // text after it stays comment-colored
    let line = r#"string url = "http://x"; int y;"#;
    let spans = csharp().highlight(line);
    let quote = line.find('"').unwrap();
    let close = line.rfind('"').unwrap() + 1;
    assert_eq!(
        summary(&spans),
        vec![
            (0, 6, Category::Keyword),
            (quote, close - quote, Category::String),
            (close, line.len() - close, Category::Comment),
        ]
    );
}

#[test]
fn test_keyword_in_identifier_not_matched() {
    let spans = csharp().highlight("string classic = newValue;");
    assert_eq!(summary(&spans), vec![(0, 6, Category::Keyword)]);
}

#[test]
fn test_java_keywords() {
    let java = java_grammar(&Theme::default());
    let line = "public static void main(String[] args) {";
    let words: Vec<_> = java.highlight(line).iter().map(|s| s.text(line).to_string()).collect();
    assert_eq!(words, vec!["public", "static", "void"]);

    // C#-only keywords are plain in Java and vice versa
    assert!(java.highlight("foreach").is_empty());
    assert!(csharp().highlight("extends").is_empty());
}

#[test]
fn test_highlight_is_deterministic() {
    let grammar = csharp();
    let line = r#"if (x) { return "a"; } // done"#;
    assert_eq!(grammar.highlight(line), grammar.highlight(line));
}

#[test]
fn test_spans_sorted_and_disjoint() {
    let line = r#"public string Name = "x" + "y"; // int"#;
    let spans = csharp().highlight(line);
    for pair in spans.windows(2) {
        assert!(pair[0].end() <= pair[1].start);
    }
}
