//! Display rendering
//!
//! Writes highlighted lines as ANSI escape sequences using crossterm.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{self, Attribute, Print, SetAttribute, SetForegroundColor};

use crate::error::Result;
use crate::syntax::{Color, Style, StyledSpan};

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
    }
}

fn apply_style<W: Write>(out: &mut W, s: Style) -> Result<()> {
    queue!(out, SetForegroundColor(to_crossterm(s.fg)))?;
    if s.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if s.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

/// Write one line with its spans applied, followed by a newline
///
/// `spans` must be sorted and non-overlapping, as the highlighter returns
/// them.
pub fn write_styled_line<W: Write>(out: &mut W, line: &str, spans: &[StyledSpan]) -> Result<()> {
    let mut pos = 0;
    for span in spans {
        if span.start < pos || span.end() > line.len() {
            continue;
        }
        queue!(out, Print(&line[pos..span.start]))?;
        apply_style(out, span.style)?;
        queue!(out, Print(span.text(line)), SetAttribute(Attribute::Reset))?;
        pos = span.end();
    }
    queue!(out, Print(&line[pos..]), Print("\n"))?;
    Ok(())
}

/// List each span as `LINE:FIRST-LAST category text`
///
/// Line numbers and columns are 1-based. Columns are terminal cells, so
/// double-width characters count twice.
pub fn write_span_columns<W: Write>(
    out: &mut W,
    line_number: usize,
    line: &str,
    spans: &[StyledSpan],
) -> Result<()> {
    for span in spans {
        let cols = span.display_range(line);
        writeln!(
            out,
            "{}:{}-{} {} {}",
            line_number + 1,
            cols.start + 1,
            cols.end,
            span.category.name(),
            span.text(line)
        )?;
    }
    Ok(())
}

/// Make spaces and tabs in an indent visible (`·` and `→`)
pub fn visible_whitespace(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ' ' => '·',
            '\t' => '→',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{csharp_grammar, Theme};

    fn render(line: &str) -> String {
        let spans = csharp_grammar(&Theme::default()).highlight(line);
        let mut out = Vec::new();
        write_styled_line(&mut out, line, &spans).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_line_unchanged() {
        assert_eq!(render("x = y;"), "x = y;\n");
    }

    #[test]
    fn test_keyword_colored() {
        let rendered = render("return x;");
        assert!(rendered.contains("\x1b[38;2;255;157;0m"));
        assert!(rendered.contains("\x1b[1m"));
        assert!(rendered.ends_with(" x;\n"));
    }

    #[test]
    fn test_span_columns_count_wide_chars() {
        let line = "string 名前 = \"x\";";
        let spans = csharp_grammar(&Theme::default()).highlight(line);
        let mut out = Vec::new();
        write_span_columns(&mut out, 2, line, &spans).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3:1-6 keyword string\n3:15-17 string \"x\"\n"
        );
    }

    #[test]
    fn test_visible_whitespace() {
        assert_eq!(visible_whitespace("\t  x"), "→··x");
        assert_eq!(visible_whitespace(""), "");
    }
}
