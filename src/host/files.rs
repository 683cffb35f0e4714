//! File persistence and source tree listing

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Reads and writes whole files as text
pub trait FileStore {
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, text: &str) -> Result<()>;
}

/// [`FileStore`] over the local filesystem (UTF-8)
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn read(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote file");
        Ok(())
    }
}

/// The openable files under a project root
///
/// Only files whose extension is in the allow list are visible. Hidden
/// entries (names starting with `.`) are skipped.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    /// Lowercased extensions without the dot
    extensions: Vec<String>,
}

impl SourceTree {
    pub fn new<I, S>(root: impl Into<PathBuf>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            root: root.into(),
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check whether a file may be shown/opened
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
    }

    /// All accepted files under the root, recursively, sorted by path
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.collect(&self.root, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn collect(&self, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                self.collect(&path, out)?;
            } else if file_type.is_file() && self.accepts(&path) {
                out.push(path);
            }
        }
        Ok(())
    }
}
