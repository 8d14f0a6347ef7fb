use serde_json::Value;

use crate::registry::{LATEST_KEY, REQUIRED_FIELDS};

/// Check a descriptor's shape. `package_name` is derived from the descriptor's
/// file name. An empty result means the structure is valid.
#[tracing::instrument(skip(descriptor))]
pub fn validate_structure(package_name: &str, descriptor: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        if descriptor.get(field).is_none() {
            errors.push(format!("Missing required field: {}", field));
        }
    }

    // A missing name is also a mismatch, reported as `null`.
    let name = descriptor.get("name");
    if name.and_then(Value::as_str) != Some(package_name) {
        errors.push(format!(
            "Package name mismatch: expected '{}', found '{}'",
            package_name,
            name.map_or_else(|| "null".to_string(), plain)
        ));
    }

    if let Some(versions) = descriptor.get("versions") {
        match versions.as_object() {
            None => errors.push("'versions' must be an object".to_string()),
            Some(versions) => match versions.get(LATEST_KEY) {
                None => errors.push(format!("Missing '{}' in versions", LATEST_KEY)),
                Some(latest) => {
                    let resolved = latest
                        .as_str()
                        .is_some_and(|v| v != LATEST_KEY && versions.contains_key(v));
                    if !resolved {
                        errors.push(format!(
                            "Latest version '{}' not found in versions",
                            plain(latest)
                        ));
                    }
                }
            },
        }
    }

    errors
}

/// Strings without their JSON quotes, anything else as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
