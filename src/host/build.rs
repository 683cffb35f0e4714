//! Compile-and-run pipeline for Java sources

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Captured result of a build or run step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` if the process was killed by a signal
    pub status: Option<i32>,
    /// False when compilation failed and nothing was run
    pub ran: bool,
}

impl RunOutput {
    fn from_output(output: Output, ran: bool) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
            ran,
        }
    }

    pub fn success(&self) -> bool {
        self.ran && self.status == Some(0)
    }
}

/// Builds and runs one source file
pub trait BuildRunner {
    fn run(&self, source: &Path) -> Result<RunOutput>;
}

/// Runs `javac` then `java` on a single source file
///
/// Classes are compiled next to the source unless an output directory is
/// set. If compilation fails the compiler's output is returned and the
/// program is not started.
#[derive(Debug, Clone)]
pub struct JavaRunner {
    javac: PathBuf,
    java: PathBuf,
    out_dir: Option<PathBuf>,
}

impl JavaRunner {
    pub fn new() -> Self {
        Self {
            javac: PathBuf::from("javac"),
            java: PathBuf::from("java"),
            out_dir: None,
        }
    }

    /// Builder: use specific `javac`/`java` executables
    pub fn with_tools(mut self, javac: impl Into<PathBuf>, java: impl Into<PathBuf>) -> Self {
        self.javac = javac.into();
        self.java = java.into();
        self
    }

    /// Builder: write classes to `dir`
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    fn exec(tool: &Path, command: &mut Command) -> Result<Output> {
        tracing::debug!(?command, "running build tool");
        command.output().map_err(|source| Error::BuildTool {
            tool: tool.display().to_string(),
            source,
        })
    }
}

impl Default for JavaRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildRunner for JavaRunner {
    fn run(&self, source: &Path) -> Result<RunOutput> {
        let class_name = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_dir = match (&self.out_dir, source.parent()) {
            (Some(dir), _) => dir.clone(),
            (None, Some(parent)) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            (None, _) => PathBuf::from("."),
        };

        let compiled = Self::exec(
            &self.javac,
            Command::new(&self.javac).arg("-d").arg(&out_dir).arg(source),
        )?;
        if !compiled.status.success() {
            tracing::info!(source = %source.display(), "compilation failed");
            return Ok(RunOutput::from_output(compiled, false));
        }

        let run = Self::exec(
            &self.java,
            Command::new(&self.java).arg("-cp").arg(&out_dir).arg(&class_name),
        )?;
        Ok(RunOutput::from_output(run, true))
    }
}
