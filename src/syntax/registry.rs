//! Grammar registry
//!
//! Holds every grammar the process knows about and resolves a language by
//! name or by file extension. Grammars are shared as `Arc<Grammar>`:
//! registering a new grammar (even one that replaces a name) never changes a
//! grammar somebody already holds.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::builtin;
use super::category::Theme;
use super::definition::GrammarDefinition;
use super::grammar::Grammar;
use crate::error::{Error, Result};

/// Language name and extension lookup for grammars
#[derive(Debug, Default)]
pub struct GrammarRegistry {
    /// Lowercased language name -> grammar
    grammars: HashMap<String, Arc<Grammar>>,
    /// Lowercased extension -> lowercased language name
    extension_map: HashMap<String, String>,
}

impl GrammarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in grammars styled with `theme`
    pub fn with_builtins(theme: &Theme) -> Self {
        let mut registry = Self::new();
        for grammar in builtin::all_grammars(theme) {
            registry.register(grammar);
        }
        registry
    }

    /// Add a grammar, replacing any grammar with the same name
    pub fn register(&mut self, grammar: Grammar) -> Arc<Grammar> {
        let key = grammar.name().to_lowercase();
        for ext in grammar.extensions() {
            self.extension_map.insert(ext.to_lowercase(), key.clone());
        }

        let grammar = Arc::new(grammar);
        if self.grammars.insert(key, Arc::clone(&grammar)).is_some() {
            tracing::debug!(language = grammar.name(), "replaced grammar");
        } else {
            tracing::debug!(language = grammar.name(), rules = grammar.rules().len(), "registered grammar");
        }
        grammar
    }

    /// Look up a grammar by language name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<Grammar>> {
        self.grammars.get(&name.to_lowercase()).cloned()
    }

    /// Like [`get`](Self::get), for callers that treat a miss as an error
    pub fn require(&self, name: &str) -> Result<Arc<Grammar>> {
        self.get(name)
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))
    }

    /// Detect language name from filename
    pub fn detect_language(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        let key = self.extension_map.get(&ext)?;
        self.grammars.get(key).map(|g| g.name())
    }

    /// Grammar for a file, chosen by extension
    pub fn detect(&self, path: &Path) -> Option<Arc<Grammar>> {
        self.detect_language(path).and_then(|name| self.get(name))
    }

    /// Load and register one grammar file
    pub fn load_file(&mut self, path: &Path, theme: &Theme) -> Result<Arc<Grammar>> {
        let contents = fs::read_to_string(path)?;
        let grammar = GrammarDefinition::from_toml_str(&contents)?.build(theme)?;
        tracing::debug!(path = %path.display(), language = grammar.name(), "loaded grammar file");
        Ok(self.register(grammar))
    }

    /// Load every `*.toml` grammar file in `dir`, in file name order
    ///
    /// Returns how many grammars were registered. Stops at the first file
    /// that fails to load.
    pub fn load_dir(&mut self, dir: &Path, theme: &Theme) -> Result<usize> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.load_file(path, theme)?;
        }
        Ok(paths.len())
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.grammars.values().map(|g| g.name()).collect();
        names.sort();
        names
    }
}
