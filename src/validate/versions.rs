use log::debug;
use serde_json::{Map, Value};

use crate::http::CheckUrl;
use crate::registry::{LATEST_KEY, VersionEntry};

/// A version and the download URL it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRef {
    pub version: String,
    pub url: String,
}

/// Findings for one package's versions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Downloads that answered HEAD with 200.
    pub verified: Vec<DownloadRef>,
    /// Downloads not probed because no checker was supplied (offline mode).
    pub unchecked: Vec<DownloadRef>,
}

/// Validate every entry of a structurally valid `versions` object, except `latest`.
///
/// Pass `None` as the checker to skip reachability checks.
#[tracing::instrument(skip(versions, checker))]
pub async fn validate_versions<C: CheckUrl + ?Sized>(
    package_name: &str,
    versions: &Map<String, Value>,
    checker: Option<&C>,
) -> VersionReport {
    let mut report = VersionReport::default();

    for (version, value) in versions {
        if version == LATEST_KEY {
            continue;
        }

        match VersionEntry::classify(value) {
            VersionEntry::Legacy => report.warnings.push(format!(
                "Version {}: legacy format without download URL",
                version
            )),
            VersionEntry::MissingDownload => report
                .errors
                .push(format!("Version {}: missing 'download' field", version)),
            VersionEntry::InvalidDownload => report
                .errors
                .push(format!("Version {}: 'download' must be a string", version)),
            VersionEntry::Release { download } => {
                let download_ref = DownloadRef {
                    version: version.clone(),
                    url: download.to_string(),
                };

                let Some(checker) = checker else {
                    report.unchecked.push(download_ref);
                    continue;
                };

                let status = checker.check_url(download).await;
                if status.is_valid() {
                    report.verified.push(download_ref);
                } else {
                    debug!("{} {}: {:?}", package_name, version, status);
                    report
                        .errors
                        .push(format!("Version {}: {} ({})", version, status, download));
                }
            }
        }
    }

    report
}
