//! `pixflip render` - one-shot render to stdout.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::LoadArgs;
use crate::config::Config;
use crate::{loader, render};

/// Renders the image once and writes it to stdout.
///
/// Unlike `view` this never touches terminal modes, so the output can be
/// piped or redirected; downscaling only happens when requested via flag
/// or config.
pub fn handle_render(path: &Path, args: &LoadArgs, config: &Config) -> Result<()> {
    let options = super::resolve_load_options(args, config, None);
    let grid = loader::load_grid(path, &options)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let stdout = io::stdout();
    render::render_grid(&grid, &mut stdout.lock()).context("failed to render grid")?;
    Ok(())
}
