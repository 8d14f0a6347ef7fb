use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Package name -> arbitrary metadata. Only the keys are inspected.
pub type Index = BTreeMap<String, Value>;

/// Why a registry file could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    Io {
        path: PathBuf,
        detail: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            LoadError::InvalidJson { path, source } => {
                write!(f, "Invalid JSON in {}: {}", path.display(), source)
            }
            LoadError::Io { path, detail } => {
                write!(f, "Error reading {}: {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::InvalidJson { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load the registry index. The top level must be a JSON object.
#[tracing::instrument(skip(runtime))]
pub fn load_index<R: Runtime>(runtime: &R, path: &Path) -> Result<Index, LoadError> {
    load(runtime, path)
}

/// Load a package descriptor. Any JSON value is accepted; shape is checked later.
#[tracing::instrument(skip(runtime))]
pub fn load_descriptor<R: Runtime>(runtime: &R, path: &Path) -> Result<Value, LoadError> {
    load(runtime, path)
}

fn load<R: Runtime, T: serde::de::DeserializeOwned>(
    runtime: &R,
    path: &Path,
) -> Result<T, LoadError> {
    let content = runtime.read_to_string(path).map_err(|e| {
        match e.downcast_ref::<std::io::Error>().map(|io| io.kind()) {
            Some(ErrorKind::NotFound) => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                detail: format!("{:#}", e),
            },
        }
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
