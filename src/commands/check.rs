use log::{debug, info};
use serde_json::Value;

use super::config::Config;
use super::report::{Report, Summary};
use crate::{
    http::CheckUrl,
    registry::{load_descriptor, load_index, package_name},
    runtime::Runtime,
    validate::{check_index_consistency, validate_structure, validate_versions},
};

/// Validate the whole registry, printing progress as it goes.
///
/// Only an unreadable index or a missing packages directory stops the run;
/// every other problem is reported and counted.
#[tracing::instrument(skip(config))]
pub async fn check<R: Runtime, C: CheckUrl>(config: &Config<R, C>) -> Summary {
    let runtime = &config.runtime;
    let mut report = Report::new();
    report.banner();

    let index = match load_index(runtime, &config.index_path) {
        Ok(index) => index,
        Err(e) => {
            report.fatal(e);
            return report.finish();
        }
    };
    info!("Loaded index with {} package(s)", index.len());
    let index_name = config
        .index_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.index_path.display().to_string());
    report.ok(format!("Loaded {} successfully", index_name));

    if !runtime.is_dir(&config.packages_dir) {
        report.fatal(format!(
            "Packages directory not found: {}",
            config.packages_dir.display()
        ));
        return report.finish();
    }

    let package_files = match runtime.list_files(&config.packages_dir, "json") {
        Ok(files) => files,
        Err(e) => {
            report.fatal(format!(
                "Error reading {}: {:#}",
                config.packages_dir.display(),
                e
            ));
            return report.finish();
        }
    };
    report.line(format!("📁 Found {} package files", package_files.len()));

    report.section("🔗 Checking index consistency...");
    let consistency_errors = check_index_consistency(&index, &package_files);
    if consistency_errors.is_empty() {
        report.ok("Index and package files are consistent");
    }
    for error in consistency_errors {
        report.error(error);
    }

    for path in &package_files {
        let Some(name) = package_name(path) else {
            continue;
        };
        report.section(format!("📦 Validating {}...", name));

        let descriptor = match load_descriptor(runtime, path) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                report.error(e);
                continue;
            }
        };

        let structure_errors = validate_structure(&name, &descriptor);
        if !structure_errors.is_empty() {
            for error in structure_errors {
                report.error(error);
            }
            debug!("Skipping version checks for {}", name);
            continue;
        }

        let Some(versions) = descriptor.get("versions").and_then(Value::as_object) else {
            continue;
        };

        let outcome = validate_versions(&name, versions, config.checker.as_ref()).await;
        for download in &outcome.verified {
            report.ok(format!("Version {}: {}", download.version, download.url));
        }
        for download in &outcome.unchecked {
            report.skipped(format!(
                "Version {}: {} (not checked, offline)",
                download.version, download.url
            ));
        }
        for warning in outcome.warnings {
            report.warning(warning);
        }
        if outcome.errors.is_empty() {
            report.ok(format!("Package {} is valid", name));
        }
        for error in outcome.errors {
            report.error(error);
        }
    }

    report.finish()
}
