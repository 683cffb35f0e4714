//! codelight - line highlighting and auto-indent for lightweight code editors
//!
//! The engine is two pure functions a host editor calls on input events:
//! [`Grammar::highlight`](syntax::Grammar::highlight) whenever a line's text
//! changes, and [`IndentEngine::compute_indent`](indent::IndentEngine::compute_indent)
//! whenever a line break is inserted. [`hooks::EditorHooks`] bundles both for
//! one language. Everything else here is the host side: buffers, files,
//! configuration and the Java build pipeline.

pub mod buffer;
pub mod config;
pub mod display;
pub mod error;
pub mod hooks;
pub mod host;
pub mod indent;
pub mod syntax;

pub use error::{Error, Result};
