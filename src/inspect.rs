//! Pixel statistics used to sanity-check a rendered menu
//!
//! Font and glyph rendering differ between machines, so checks look at
//! variance and monotonicity instead of exact pixels.

use crate::layout::{Bounds, Grid};
use image::{Rgb, RgbImage};

/// Minimum luminance variance for a region to count as drawn on.
/// A bare gradient stays far below 1.0 across a cell.
pub const CONTENT_VARIANCE_THRESHOLD: f64 = 25.0;

/// Rec. 601 luma
pub fn luminance(p: &Rgb<u8>) -> f64 {
    0.299 * p[0] as f64 + 0.587 * p[1] as f64 + 0.114 * p[2] as f64
}

/// Luminance variance over `bounds`, clipped to the image
pub fn region_variance(img: &RgbImage, bounds: Bounds) -> f64 {
    let x1 = bounds.right().min(img.width());
    let y1 = bounds.bottom().min(img.height());
    let mut n = 0u64;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for y in bounds.y..y1 {
        for x in bounds.x..x1 {
            let l = luminance(img.get_pixel(x, y));
            sum += l;
            sum_sq += l * l;
            n += 1;
        }
    }
    if n == 0 {
        return 0.0;
    }
    let mean = sum / n as f64;
    (sum_sq / n as f64 - mean * mean).max(0.0)
}

pub fn cell_has_content(img: &RgbImage, bounds: Bounds) -> bool {
    region_variance(img, bounds) > CONTENT_VARIANCE_THRESHOLD
}

/// Whether every channel along column `x` only rises or only falls
pub fn column_is_monotonic(img: &RgbImage, x: u32) -> bool {
    if x >= img.width() {
        return false;
    }
    (0..3).all(|c| {
        let values: Vec<u8> = (0..img.height()).map(|y| img.get_pixel(x, y)[c]).collect();
        let rising = values.windows(2).all(|w| w[0] <= w[1]);
        let falling = values.windows(2).all(|w| w[0] >= w[1]);
        rising || falling
    })
}

/// Luminance variance of every card of `grid`, in cell order
pub fn cell_variances(img: &RgbImage, grid: &Grid, padding: u32) -> Vec<(Bounds, f64)> {
    (0..grid.cell_count())
        .map(|i| {
            let card = grid.card(i, padding);
            (card, region_variance(img, card))
        })
        .collect()
}
