#![allow(dead_code)]
#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub fn cmd() -> Command {
    Command::cargo_bin("icecast-guard").expect("binary should exist")
}

/// Writes an Icecast XML fixture into `dir` and returns its path.
pub fn write_config(dir: &TempDir, name: &str, xml: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, xml).unwrap();
    path
}

/// A configuration that triggers no rule.
pub const HEALTHY_CONFIG: &str = "<icecast>\
    <limits><clients>500</clients></limits>\
    <authentication>\
    <source-password>s3cret</source-password>\
    <admin-user>ops</admin-user>\
    <admin-password>s3cret</admin-password>\
    <relay-password>r3lay</relay-password>\
    </authentication>\
    <hostname>stream.example.org</hostname>\
    <mount><mount-name>/live</mount-name></mount>\
    <mount><mount-name>/backup</mount-name></mount>\
    </icecast>";

/// Triggers the critical authentication rule plus several advisories.
pub const RISKY_CONFIG: &str = "<icecast>\
    <limits><clients>25</clients></limits>\
    <hostname>localhost</hostname>\
    </icecast>";
