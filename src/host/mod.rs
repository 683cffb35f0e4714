//! Host collaborators
//!
//! The services an editor shell provides around the engine: reading and
//! writing files, listing the source files of a project, and building and
//! running a program. None of them touch highlighting or indentation.

mod build;
mod files;

pub use build::{BuildRunner, JavaRunner, RunOutput};
pub use files::{FileStore, FsStore, SourceTree};
