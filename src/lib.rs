//! pixflip - terminal image viewer with rotate and mirror transforms.
//!
//! Loads a raster image, quantizes it to the ANSI 256-color palette and
//! paints it in the terminal as background-colored blocks. The interactive
//! viewer applies geometric transforms (rotations and mirrors) to the grid
//! and redraws after each one.
//!
//! # Modules
//!
//! - `grid`: the rectangular [`PixelGrid`] type and its four transforms
//! - `render`: color-code to escape-sequence mapping and the grid painter
//! - `loader`: image decoding and RGB-to-palette quantization
//! - `viewer`: the interactive raw-mode loop
//! - `cli` / `commands`: the clap surface and its handlers
//! - `config`: TOML configuration file

pub mod cli;
pub mod commands;
pub mod config;
pub mod grid;
pub mod loader;
pub mod render;
pub mod viewer;

pub use config::Config;
pub use grid::PixelGrid;

/// Version string with build metadata.
///
/// Dev builds append the git SHA emitted by the build script; builds with
/// the `release` feature carry the build date only.
pub fn version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    let date = env!("PIXFLIP_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({} {})", base, sha, date),
        None => format!("{} ({})", base, date),
    }
}
