//! File system operations backed by `std::fs` and `glob`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_dir_impl(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn list_files_impl(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        // Escape the directory so brackets or asterisks in it are taken literally.
        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = format!("{}/*.{}", escaped, extension);

        let mut files = Vec::new();
        for entry in
            glob::glob(&pattern).with_context(|| format!("Invalid file pattern {}", pattern))?
        {
            let path = entry.context("Failed to read directory entry")?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
