//! Buffer representation - the lines of one open file
//!
//! This is the host side of the engine: it owns the text, asks the hooks
//! for spans and indents, and does the actual insertion.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::hooks::{EditorHooks, LineContext};
use crate::host::FileStore;
use crate::syntax::StyledSpan;

/// A buffer containing text and metadata
#[derive(Debug, Clone)]
pub struct Buffer {
    /// Lines of text, without trailing newlines
    lines: Vec<String>,
    /// Buffer name (file name, or "untitled")
    name: String,
    /// Associated file path (None for unnamed buffers)
    filename: Option<PathBuf>,
    /// Whether buffer has unsaved changes
    modified: bool,
    /// Line terminator written back on save (`\n` or `\r\n`)
    line_ending: &'static str,
    /// Whether the text ended with a line terminator
    trailing_newline: bool,
}

impl Buffer {
    /// Create a new empty buffer with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            lines: vec![String::new()], // Always have at least one line
            name: name.into(),
            filename: None,
            modified: false,
            line_ending: "\n",
            trailing_newline: false,
        }
    }

    /// Create an unnamed buffer holding `text`
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new("untitled");
        buffer.set_text(text);
        buffer
    }

    /// Read a file through `store`
    pub fn open(store: &dyn FileStore, path: &Path) -> Result<Self> {
        let content = store.read(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());

        let mut buffer = Self::new(name);
        buffer.set_text(&content);
        buffer.filename = Some(path.to_path_buf());
        Ok(buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
        self.line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };
        self.trailing_newline = text.ends_with('\n');
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line terminator the buffer was read with
    pub fn line_ending(&self) -> &str {
        self.line_ending
    }

    /// Whole buffer as it will be saved
    ///
    /// Lines are joined with the buffer's line ending, and the final
    /// terminator is kept if the text it was created from had one.
    pub fn text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline {
            text.push_str(self.line_ending);
        }
        text
    }

    /// Insert a string at position; `s` must not contain newlines
    ///
    /// Nothing happens if the position is not a char boundary of the line.
    pub fn insert_str(&mut self, line_idx: usize, byte_pos: usize, s: &str) {
        if let Some(line) = self.lines.get_mut(line_idx) {
            if !line.is_char_boundary(byte_pos) {
                return;
            }
            line.insert_str(byte_pos, s);
            self.modified = true;
        }
    }

    /// Insert a newline, splitting the current line
    pub fn insert_newline(&mut self, line_idx: usize, byte_pos: usize) {
        if let Some(line) = self.lines.get_mut(line_idx) {
            if !line.is_char_boundary(byte_pos) {
                return;
            }
            let new_line = line.split_off(byte_pos);
            self.lines.insert(line_idx + 1, new_line);
            self.modified = true;
        }
    }

    /// Press Enter: split the line, then insert the indent the hooks compute
    ///
    /// The hooks see the full line as it was before the split. Returns the
    /// new cursor position (line, byte column).
    pub fn insert_line_break(
        &mut self,
        hooks: &EditorHooks,
        line_idx: usize,
        byte_pos: usize,
    ) -> (usize, usize) {
        let Some(line) = self.lines.get(line_idx) else {
            return (line_idx, byte_pos);
        };
        if !line.is_char_boundary(byte_pos) {
            return (line_idx, byte_pos);
        }
        let indent = hooks.on_line_break(&LineContext::new(line, line_idx, byte_pos));

        self.insert_newline(line_idx, byte_pos);
        self.insert_str(line_idx + 1, 0, &indent);
        (line_idx + 1, indent.len())
    }

    /// Spans for one line
    pub fn highlight_line(&self, hooks: &EditorHooks, line_idx: usize) -> Vec<StyledSpan> {
        self.line(line_idx)
            .map(|line| hooks.on_line_changed(line))
            .unwrap_or_default()
    }

    /// Write buffer back to its file
    pub fn save(&mut self, store: &dyn FileStore) -> Result<()> {
        let Some(path) = self.filename.clone() else {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "No filename set").into());
        };
        self.save_as(store, &path)
    }

    /// Write buffer to a new path and adopt it as the buffer's file
    pub fn save_as(&mut self, store: &dyn FileStore, path: &Path) -> Result<()> {
        store.write(path, &self.text())?;
        if let Some(name) = path.file_name() {
            self.name = name.to_string_lossy().into_owned();
        }
        self.filename = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new("untitled")
    }
}

fn split_lines(text: &str) -> Vec<String> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
