//! RGB to ANSI 256-palette quantization.
//!
//! Maps 8-bit RGB channels onto the 6x6x6 color cube that occupies palette
//! indices 16-231. Each channel is cut into 6 levels with integer division;
//! the final code is `16 + 36*r + 6*g + b`. Pixels below the alpha
//! threshold map to the fixed white entry instead of the cube.

/// Palette index used for transparent pixels (ANSI bright white).
pub const TRANSPARENT_WHITE: i32 = 15;

/// First index of the 6x6x6 RGB cube in the 256-color palette.
pub const CUBE_OFFSET: i32 = 16;

/// Number of levels per RGB component in the cube.
pub const CUBE_LEVELS: i32 = 6;

/// Stride of the red component inside the cube.
const RED_STRIDE: i32 = 36;

/// Stride of the green component inside the cube.
const GREEN_STRIDE: i32 = 6;

/// Cuts an 8-bit channel down to one of the cube's 6 levels.
fn level(channel: u8) -> i32 {
    (i32::from(channel) * CUBE_LEVELS / 256).min(CUBE_LEVELS - 1)
}

/// Quantizes one RGBA pixel to a 256-palette color code.
///
/// Pixels with `alpha < alpha_threshold` become [`TRANSPARENT_WHITE`];
/// a threshold of 0 disables the transparency mapping entirely.
pub fn quantize_rgba(r: u8, g: u8, b: u8, alpha: u8, alpha_threshold: u8) -> i32 {
    if alpha < alpha_threshold {
        return TRANSPARENT_WHITE;
    }
    CUBE_OFFSET + RED_STRIDE * level(r) + GREEN_STRIDE * level(g) + level(b)
}
