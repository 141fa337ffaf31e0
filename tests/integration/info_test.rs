//! Integration tests for `pixflip info`.

use predicates::prelude::*;

use super::helpers::{fixture_2x2, fixture_solid, pixflip};

#[test]
fn info_reports_source_grid_and_colors() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture_2x2(&dir);

    pixflip()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("source: 2 x 2 px"))
        .stdout(predicate::str::contains("grid:   2 cols x 2 rows"))
        .stdout(predicate::str::contains("colors: 4 distinct"));
}

#[test]
fn info_reflects_downscaling() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture_solid(&dir, 8, 4);

    pixflip()
        .arg("info")
        .arg(&path)
        .args(["--max-width", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source: 8 x 4 px"))
        .stdout(predicate::str::contains("grid:   4 cols x 2 rows"))
        .stdout(predicate::str::contains("colors: 1 distinct"));
}

#[test]
fn info_fails_cleanly_for_missing_file() {
    pixflip()
        .arg("info")
        .arg("does-not-exist.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode"));
}
