mod common;

use common::cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("best-practices"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_prints_package_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    cmd().arg("doctor").assert().failure();
}

#[test]
fn best_practices_prints_profile() {
    cmd()
        .arg("best-practices")
        .arg("large")
        .assert()
        .success()
        .stdout(predicate::str::contains("Best Practices for Large Streams"));
}

#[test]
fn best_practices_is_case_insensitive() {
    cmd()
        .arg("best-practices")
        .arg("SMALL")
        .assert()
        .success()
        .stdout(predicate::str::contains("Best Practices for Small Streams"));
}

#[test]
fn best_practices_unknown_key_prints_fixed_message() {
    cmd()
        .arg("best-practices")
        .arg("xlarge")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid use case"));
}

#[test]
fn init_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".icecast-guard.toml");

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("expected_listeners"));
    assert!(content.contains("fail_on"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".icecast-guard.toml");
    std::fs::write(&path, "expected_listeners = 5\n").unwrap();

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
}
