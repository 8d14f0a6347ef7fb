use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::registry::{Index, package_name};

/// Check that index entries and package files correspond one-to-one.
///
/// A file's package name is its name without `.json`, as given by
/// [`package_name`]. Missing files are reported first (in index order), then
/// orphan files (in the order given).
#[tracing::instrument(skip(index, package_files))]
pub fn check_index_consistency(index: &Index, package_files: &[PathBuf]) -> Vec<String> {
    let mut errors = Vec::new();

    let names: BTreeSet<String> = package_files
        .iter()
        .filter_map(|path| package_name(path))
        .collect();

    for name in index.keys() {
        if !names.contains(name) {
            errors.push(format!(
                "Package '{}' is listed in index but has no file packages/{}.json",
                name, name
            ));
        }
    }

    for path in package_files {
        let Some(name) = package_name(path) else {
            continue;
        };
        if !index.contains_key(&name) {
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            errors.push(format!("Package file {} has no entry in index", file_name));
        }
    }

    errors
}
