//! Wall color sampling and near-white adjustment

use image::{Rgb, RgbImage};

use crate::io::configuration::{NEAR_WHITE_THRESHOLD, WALL_FALLBACK_COLOR};

/// Substitute light gray for samples too close to the white canvas
///
/// A wall drawn in a near-white color would vanish against the background.
/// A sample is near-white only when every channel sits at or above the
/// threshold; a single darker channel leaves the sample unmodified.
pub fn adjust_wall_color(sample: Rgb<u8>) -> Rgb<u8> {
    if sample.0.iter().all(|&channel| channel >= NEAR_WHITE_THRESHOLD) {
        Rgb(WALL_FALLBACK_COLOR)
    } else {
        sample
    }
}

/// Source pixel at `(x, y)`, clamped into the valid coordinate range
///
/// Wall midpoints on the canvas can fall past the last source pixel where the
/// grid division discarded remainder pixels; clamping keeps every lookup in
/// range.
pub fn sample_clamped(source: &RgbImage, x: u32, y: u32) -> Rgb<u8> {
    let sx = x.min(source.width().saturating_sub(1));
    let sy = y.min(source.height().saturating_sub(1));
    *source.get_pixel(sx, sy)
}
