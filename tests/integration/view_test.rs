//! Integration tests for `pixflip view`.
//!
//! The interactive loop itself needs a real terminal; what can be tested
//! headless is the TTY guard and its hint toward the pipeable command.

use predicates::prelude::*;

use super::helpers::{fixture_2x2, pixflip};

#[test]
fn view_without_a_tty_suggests_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture_2x2(&dir);

    pixflip()
        .arg("view")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("pixflip render"));
}

#[test]
fn view_requires_an_image_argument() {
    pixflip()
        .arg("view")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
