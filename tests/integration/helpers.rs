//! Shared helpers for integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// Command handle for the pixflip binary.
///
/// Points the config lookup at the system temp dir so a developer's real
/// config file cannot change test outcomes.
pub fn pixflip() -> Command {
    let mut cmd = Command::cargo_bin("pixflip").expect("pixflip binary should build");
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir());
    cmd
}

/// Writes a 2x2 PNG fixture: red, green / blue, transparent.
///
/// Quantizes to the grid `[[196, 46], [21, 15]]`.
pub fn fixture_2x2(dir: &TempDir) -> PathBuf {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
    img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
    img.put_pixel(1, 1, Rgba([0, 0, 0, 0]));

    let path = dir.path().join("fixture_2x2.png");
    img.save(&path).expect("fixture image should save");
    path
}

/// Writes a single-color PNG fixture of the given size.
pub fn fixture_solid(dir: &TempDir, width: u32, height: u32) -> PathBuf {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));

    let path = dir.path().join(format!("solid_{}x{}.png", width, height));
    img.save(&path).expect("fixture image should save");
    path
}
