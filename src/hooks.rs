//! Editor event hooks
//!
//! A host wires the engine into its text widget through [`EditorHooks`]:
//! it calls [`on_line_changed`](EditorHooks::on_line_changed) whenever a
//! line's text changes and [`on_line_break`](EditorHooks::on_line_break)
//! right after inserting a newline, then inserts the returned indent itself.

use std::fmt;
use std::sync::Arc;

use crate::indent::IndentEngine;
use crate::syntax::{Grammar, StyledSpan};

/// What a line-break handler knows about the break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineContext<'a> {
    /// Full text of the line the cursor was on before the break
    pub line: &'a str,
    /// Zero-based line number of that line
    pub line_number: usize,
    /// Byte column the break was inserted at
    pub column: usize,
}

impl<'a> LineContext<'a> {
    pub fn new(line: &'a str, line_number: usize, column: usize) -> Self {
        Self {
            line,
            line_number,
            column,
        }
    }
}

/// Callback computing the indent for the line after a break
pub type LineBreakHandler = Box<dyn Fn(&LineContext<'_>) -> String + Send + Sync>;

/// Highlight and indent callbacks bound to one grammar
pub struct EditorHooks {
    grammar: Arc<Grammar>,
    on_break: LineBreakHandler,
}

impl EditorHooks {
    /// Hooks using the grammar's own indent policy with `indent_width` units
    pub fn new(grammar: Arc<Grammar>, indent_width: usize) -> Self {
        let engine = grammar.indent_engine(indent_width);
        Self::with_engine(grammar, engine)
    }

    /// Hooks using an explicit indent engine
    pub fn with_engine(grammar: Arc<Grammar>, engine: IndentEngine) -> Self {
        Self {
            grammar,
            on_break: Box::new(move |ctx: &LineContext<'_>| engine.compute_indent(ctx.line)),
        }
    }

    /// Replace the line-break handler
    pub fn with_line_break_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&LineContext<'_>) -> String + Send + Sync + 'static,
    {
        self.on_break = Box::new(handler);
        self
    }

    pub fn grammar(&self) -> &Arc<Grammar> {
        &self.grammar
    }

    /// Spans for a line whose text just changed
    pub fn on_line_changed(&self, line: &str) -> Vec<StyledSpan> {
        self.grammar.highlight(line)
    }

    /// Indent to insert after a line break
    pub fn on_line_break(&self, ctx: &LineContext<'_>) -> String {
        (self.on_break)(ctx)
    }
}

impl fmt::Debug for EditorHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorHooks")
            .field("grammar", &self.grammar.name())
            .finish_non_exhaustive()
    }
}
