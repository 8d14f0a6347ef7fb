//! Runtime abstraction for file system access.
//!
//! Registry loading and discovery go through the [`Runtime`] trait so the
//! driver can be exercised against a mocked file system in tests.

mod fs;

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn is_dir(&self, path: &Path) -> bool;

    /// List the regular files directly inside `dir` whose name ends in `.<extension>`,
    /// sorted by path.
    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        self.list_files_impl(dir, extension)
    }
}
