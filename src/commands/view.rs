//! `pixflip view` - the interactive viewer.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::cli::LoadArgs;
use crate::config::Config;
use crate::loader;
use crate::viewer;

/// Loads the image and hands it to the interactive loop.
///
/// Without an explicit width the grid is fitted to the current terminal
/// (two cells per pixel).
pub fn handle_view(path: &Path, args: &LoadArgs, config: &Config) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!("the interactive viewer needs a terminal; use `pixflip render` for piped output");
    }

    let fit = terminal_size::terminal_size().map(|(width, _)| (u32::from(width.0) / 2).max(1));
    let options = super::resolve_load_options(args, config, fit);
    let grid = loader::load_grid(path, &options)
        .with_context(|| format!("failed to load {}", path.display()))?;

    debug!(rows = grid.rows(), cols = grid.cols(), "starting viewer");
    viewer::run(grid)
}
