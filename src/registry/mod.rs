//! Registry data: the package index and per-package descriptors.

mod descriptor;
mod loader;

pub use descriptor::{LATEST_KEY, REQUIRED_FIELDS, VersionEntry, package_name};
pub use loader::{Index, LoadError, load_descriptor, load_index};
