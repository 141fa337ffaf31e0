//! `pixflip info` - image and grid facts without rendering.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use image::GenericImageView;

use crate::cli::LoadArgs;
use crate::config::Config;
use crate::loader;

/// Prints decoded dimensions, the resulting grid shape and the number of
/// distinct palette entries the image quantizes to.
pub fn handle_info(path: &Path, args: &LoadArgs, config: &Config) -> Result<()> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let (width, height) = img.dimensions();

    let options = super::resolve_load_options(args, config, None);
    let grid = loader::grid_from_image(&img, &options)
        .with_context(|| format!("failed to quantize {}", path.display()))?;

    let distinct: BTreeSet<i32> = grid.cells().iter().copied().collect();

    println!("image:  {}", path.display());
    println!("source: {} x {} px", width, height);
    println!("grid:   {} cols x {} rows", grid.cols(), grid.rows());
    println!("colors: {} distinct palette entries", distinct.len());
    Ok(())
}
