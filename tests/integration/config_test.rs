//! Integration tests for `pixflip config` and the auxiliary commands.

use predicates::prelude::*;

use super::helpers::pixflip;

#[test]
fn config_show_prints_defaults_without_a_file() {
    pixflip()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[load]"))
        .stdout(predicate::str::contains("alpha_threshold = 128"));
}

#[test]
fn config_path_points_at_config_toml() {
    pixflip()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_writes_then_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    pixflip()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote default config"));

    assert!(dir.path().join("pixflip").join("config.toml").exists());

    pixflip()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_generate_a_bash_script() {
    pixflip()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixflip"));
}

#[test]
fn version_carries_build_metadata() {
    pixflip()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pixflip"));
}
