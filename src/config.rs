//! Configuration file support
//!
//! Loads settings from ~/.codelight.toml (or %USERPROFILE%\.codelight.toml
//! on Windows). A missing file means defaults.
//!
//! Example:
//! ```text
//! # codelight configuration
//! indent-width = 4
//! grammar-dirs = ["~/.config/codelight/grammars"]
//!
//! [theme]
//! keyword = { fg = "#569CD6", bold = true }
//! comment = { fg = "#6A9955", italic = true }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::indent::DEFAULT_INDENT_WIDTH;
use crate::syntax::{GrammarRegistry, Theme};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Spaces per indentation unit
    pub indent_width: usize,
    /// Directories holding extra `*.toml` grammar files
    pub grammar_dirs: Vec<PathBuf>,
    /// Styles for each category
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            grammar_dirs: Vec::new(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".codelight.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::parse(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.indent_width = config.indent_width.clamp(1, 16); // Between 1 and 16
        config.grammar_dirs = config.grammar_dirs.iter().map(|d| expand_home(d)).collect();
        Ok(config)
    }

    /// Built-in grammars plus every grammar in `grammar_dirs`
    ///
    /// Directories that do not exist are skipped; a broken grammar file is
    /// an error.
    pub fn registry(&self) -> Result<GrammarRegistry> {
        let mut registry = GrammarRegistry::with_builtins(&self.theme);
        for dir in &self.grammar_dirs {
            if !dir.is_dir() {
                tracing::warn!(dir = %dir.display(), "grammar directory not found");
                continue;
            }
            let count = registry.load_dir(dir, &self.theme)?;
            tracing::info!(dir = %dir.display(), count, "loaded grammars");
        }
        Ok(registry)
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
