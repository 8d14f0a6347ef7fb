use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::Server;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_registry(root: &Path, index: &str, packages: &[(&str, String)]) {
    fs::write(root.join("index.json"), index).unwrap();
    let packages_dir = root.join("packages");
    fs::create_dir_all(&packages_dir).unwrap();
    for (name, contents) in packages {
        fs::write(packages_dir.join(format!("{}.json", name)), contents).unwrap();
    }
}

fn descriptor(name: &str, latest: &str, download: &str) -> String {
    format!(
        r#"{{
            "name": "{}",
            "author": "a",
            "description": "d",
            "versions": {{"latest": "{}", "1.0": {{"download": "{}"}}}}
        }}"#,
        name, latest, download
    )
}

/// `regcheck` run from `dir` with no arguments and a clean environment.
fn regcheck_in(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("regcheck"));
    cmd.current_dir(dir)
        .env_remove("REGCHECK_ROOT")
        .env_remove("REGCHECK_INDEX")
        .env_remove("REGCHECK_PACKAGES")
        .env_remove("REGCHECK_TIMEOUT")
        .env_remove("REGCHECK_OFFLINE");
    cmd
}

#[test]
fn test_valid_registry() {
    let mut server = Server::new();
    let mock = server.mock("HEAD", "/ok").with_status(200).create();

    let dir = tempdir().unwrap();
    write_registry(
        dir.path(),
        r#"{"foo": {}}"#,
        &[("foo", descriptor("foo", "1.0", &format!("{}/ok", server.url())))],
    );

    regcheck_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Loaded index.json successfully"))
        .stdout(predicate::str::contains("📁 Found 1 package files"))
        .stdout(predicate::str::contains("✅ Package foo is valid"))
        .stdout(predicate::str::contains("Errors:   0"))
        .stdout(predicate::str::contains("Warnings: 0"))
        .stdout(predicate::str::contains("Registry is valid!"));

    mock.assert();
}

#[test]
fn test_download_not_found() {
    let mut server = Server::new();
    let mock = server.mock("HEAD", "/missing").with_status(404).create();

    let dir = tempdir().unwrap();
    let url = format!("{}/missing", server.url());
    write_registry(
        dir.path(),
        r#"{"foo": {}}"#,
        &[("foo", descriptor("foo", "1.0", &url))],
    );

    regcheck_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!(
            "Version 1.0: URL not found ({})",
            url
        )))
        .stdout(predicate::str::contains("Package foo is valid").not())
        .stdout(predicate::str::contains("Errors:   1"));

    mock.assert();
}

#[test]
fn test_package_file_missing_from_index() {
    let dir = tempdir().unwrap();
    write_registry(
        dir.path(),
        r#"{"foo": {}}"#,
        &[
            ("foo", descriptor("foo", "1.0", "http://unused.invalid/foo")),
            ("bar", descriptor("bar", "1.0", "http://unused.invalid/bar")),
        ],
    );

    regcheck_in(dir.path())
        .arg("--offline")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Package file bar.json has no entry in index",
        ))
        .stdout(predicate::str::contains("Errors:   1"));
}

#[test]
fn test_dangling_latest() {
    let mut server = Server::new();
    let mock = server.mock("HEAD", "/ok").with_status(200).expect(0).create();

    let dir = tempdir().unwrap();
    write_registry(
        dir.path(),
        r#"{"foo": {}}"#,
        &[("foo", descriptor("foo", "2.0", &format!("{}/ok", server.url())))],
    );

    regcheck_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Latest version '2.0' not found in versions",
        ))
        .stdout(predicate::str::contains("Errors:   1"));

    mock.assert();
}

#[test]
fn test_legacy_entries_only_warn() {
    let dir = tempdir().unwrap();
    write_registry(
        dir.path(),
        r#"{"foo": {}}"#,
        &[(
            "foo",
            r#"{
                "name": "foo",
                "author": "a",
                "description": "d",
                "versions": {"latest": "0.9", "0.9": "https://example.com/foo-0.9.tgz"}
            }"#
            .to_string(),
        )],
    );

    regcheck_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("legacy format without download URL"))
        .stdout(predicate::str::contains("Warnings: 1"));
}

#[test]
fn test_missing_index_aborts() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("packages")).unwrap();

    regcheck_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("File not found"))
        .stdout(predicate::str::contains("Validation Summary").not());
}

#[test]
fn test_invalid_index_json_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.json"), "{ broken").unwrap();
    fs::create_dir(dir.path().join("packages")).unwrap();

    regcheck_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid JSON in"));
}

#[test]
fn test_missing_packages_dir_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.json"), "{}").unwrap();

    regcheck_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Packages directory not found"));
}

#[test]
fn test_invalid_descriptor_does_not_stop_others() {
    let mut server = Server::new();
    let mock = server.mock("HEAD", "/ok").with_status(200).create();

    let dir = tempdir().unwrap();
    write_registry(
        dir.path(),
        r#"{"bar": {}, "foo": {}}"#,
        &[
            ("bar", "{ not json".to_string()),
            ("foo", descriptor("foo", "1.0", &format!("{}/ok", server.url()))),
        ],
    );

    regcheck_in(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid JSON in"))
        .stdout(predicate::str::contains("Version 1.0:"))
        .stdout(predicate::str::contains("Errors:   1"));

    mock.assert();
}

#[test]
fn test_root_flag() {
    let dir = tempdir().unwrap();
    let registry = dir.path().join("registry");
    fs::create_dir(&registry).unwrap();
    write_registry(
        &registry,
        r#"{"foo": {}}"#,
        &[("foo", descriptor("foo", "1.0", "http://unused.invalid/foo"))],
    );

    regcheck_in(dir.path())
        .arg("--root")
        .arg(&registry)
        .arg("--offline")
        .assert()
        .success()
        .stdout(predicate::str::contains("not checked, offline"));
}

#[test]
fn test_missing_name_counts_twice() {
    let dir = tempdir().unwrap();
    write_registry(
        dir.path(),
        r#"{"foo": {}}"#,
        &[(
            "foo",
            r#"{"author": "a", "description": "d", "versions": {"latest": "1.0", "1.0": {"download": "http://unused.invalid/foo"}}}"#
                .to_string(),
        )],
    );

    regcheck_in(dir.path())
        .arg("--offline")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing required field: name"))
        .stdout(predicate::str::contains(
            "Package name mismatch: expected 'foo', found 'null'",
        ))
        .stdout(predicate::str::contains("Errors:   2"));
}

#[test]
fn test_runs_are_repeatable() {
    let mut server = Server::new();
    let _mock = server.mock("HEAD", "/gone").with_status(404).create();

    let dir = tempdir().unwrap();
    write_registry(
        dir.path(),
        r#"{"foo": {}, "baz": {}}"#,
        &[("foo", descriptor("foo", "1.0", &format!("{}/gone", server.url())))],
    );

    let first = regcheck_in(dir.path()).output().unwrap();
    let second = regcheck_in(dir.path()).output().unwrap();

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
