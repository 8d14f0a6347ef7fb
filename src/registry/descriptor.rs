use serde_json::Value;
use std::path::Path;

/// Fields every package descriptor must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "author", "description", "versions"];

/// Reserved key in `versions` pointing at the current release.
pub const LATEST_KEY: &str = "latest";

/// Shape of a single entry under `versions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionEntry<'a> {
    /// An object with a string `download` URL.
    Release { download: &'a str },
    /// An object without a `download` key.
    MissingDownload,
    /// An object whose `download` is not a string.
    InvalidDownload,
    /// A bare value from the pre-object format, e.g. `"1.0": "https://..."`.
    Legacy,
}

impl<'a> VersionEntry<'a> {
    pub fn classify(value: &'a Value) -> Self {
        let Some(entry) = value.as_object() else {
            return VersionEntry::Legacy;
        };

        match entry.get("download") {
            None => VersionEntry::MissingDownload,
            Some(Value::String(url)) => VersionEntry::Release { download: url },
            Some(_) => VersionEntry::InvalidDownload,
        }
    }
}

/// Package name for a descriptor file: its file name without `.json`.
pub fn package_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
