//! Integration tests for `pixflip render`.

use predicates::prelude::*;

use super::helpers::{fixture_2x2, fixture_solid, pixflip};

#[test]
fn render_paints_quantized_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture_2x2(&dir);

    pixflip()
        .arg("render")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[48;5;196m"))
        .stdout(predicate::str::contains("\x1b[48;5;46m"))
        .stdout(predicate::str::contains("\x1b[48;5;21m"))
        .stdout(predicate::str::contains("\x1b[48;5;15m"));
}

#[test]
fn render_emits_exact_rows_for_2x2_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture_2x2(&dir);

    pixflip().arg("render").arg(&path).assert().success().stdout(
        concat!(
            "\x1b[48;5;196m  \x1b[48;5;46m  \x1b[0m\n",
            "\x1b[48;5;21m  \x1b[48;5;15m  \x1b[0m\n",
            "\n"
        ),
    );
}

#[test]
fn render_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture_2x2(&dir);

    let first = pixflip().arg("render").arg(&path).output().unwrap();
    let second = pixflip().arg("render").arg(&path).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn render_honors_max_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture_solid(&dir, 8, 4);

    let output = pixflip()
        .arg("render")
        .arg(&path)
        .args(["--max-width", "4"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    // 8x4 source fitted to 4 columns keeps the aspect ratio: 2 rows.
    let resets = stdout.matches("\x1b[0m\n").count();
    assert_eq!(resets, 2);
}

#[test]
fn render_fails_cleanly_for_missing_file() {
    pixflip()
        .arg("render")
        .arg("does-not-exist.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
