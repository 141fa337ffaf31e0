//! Image loading and palette quantization.
//!
//! Decodes a raster image (PNG, JPEG, GIF, BMP, WebP), optionally
//! downscales it so the grid fits a terminal, and quantizes every pixel to
//! an ANSI 256-palette code, producing the [`PixelGrid`] the rest of the
//! program works on.

pub mod quantize;

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use rayon::prelude::*;
use tracing::debug;

use crate::grid::{GridError, PixelGrid};

pub use quantize::quantize_rgba;

/// Default alpha cutoff: pixels below half of full opacity render as white.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Options controlling decoding and quantization.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Downscale target in grid columns; `None` keeps the original width.
    pub max_width: Option<u32>,
    /// Alpha values below this map to the white palette entry.
    pub alpha_threshold: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_width: None,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

/// Image loading failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels")]
    EmptyImage,

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Loads an image file and quantizes it into a pixel grid.
pub fn load_grid(path: &Path, options: &LoadOptions) -> Result<PixelGrid, LoadError> {
    let img = image::open(path)?;
    debug!(
        width = img.width(),
        height = img.height(),
        path = %path.display(),
        "decoded image"
    );
    grid_from_image(&img, options)
}

/// Quantizes an already-decoded image into a pixel grid.
///
/// Downscaling uses nearest-neighbor sampling; resampling filters would
/// introduce blended colors the image never had.
pub fn grid_from_image(img: &DynamicImage, options: &LoadOptions) -> Result<PixelGrid, LoadError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::EmptyImage);
    }

    let resized;
    let img = match options.max_width.filter(|&max| width > max) {
        Some(max) => {
            let scaled_height = ((u64::from(height) * u64::from(max)) / u64::from(width)).max(1);
            debug!(max_width = max, scaled_height, "downscaling to fit");
            resized = img.resize_exact(max, scaled_height as u32, FilterType::Nearest);
            &resized
        }
        None => img,
    };

    let rgba = img.to_rgba8();
    let row_stride = rgba.width() as usize * 4;
    let threshold = options.alpha_threshold;

    // One quantized row per raster row; rayon keeps the ordering stable.
    let rows: Vec<Vec<i32>> = rgba
        .as_raw()
        .par_chunks_exact(row_stride)
        .map(|row| {
            row.chunks_exact(4)
                .map(|px| quantize_rgba(px[0], px[1], px[2], px[3], threshold))
                .collect()
        })
        .collect();

    Ok(PixelGrid::from_rows(rows)?)
}
