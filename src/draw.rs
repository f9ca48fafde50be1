//! Raster primitives for the menu canvas
//!
//! Every shape is described by a signed distance function (negative inside)
//! and composited with source-over blending. Coverage is taken at pixel
//! centers, giving roughly one pixel of anti-aliasing along edges.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::f32::consts::PI;

/// Floating point rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of half-size `r` around a center point
    pub fn around(cx: f32, cy: f32, r: f32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    fn grow(&self, by: f32) -> Rect {
        Rect::new(
            self.left - by,
            self.top - by,
            self.right + by,
            self.bottom + by,
        )
    }
}

/// Composite `src` over the pixel at (x, y) scaled by `coverage`.
/// Out-of-bounds coordinates are ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, src: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let sa = (src[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let s = src[c] as f32;
        let d = dst[c] as f32;
        dst[c] = ((s * sa + d * da * (1.0 - sa)) / out_a).round() as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Walk every pixel whose center lies within `bounds` and blend `color`
/// with the coverage derived from `sdf` at that center.
fn fill_sdf<F>(img: &mut RgbaImage, bounds: Rect, color: Rgba<u8>, sdf: F)
where
    F: Fn(f32, f32) -> f32,
{
    let bounds = bounds.grow(1.0);
    let x0 = bounds.left.floor().max(0.0) as i32;
    let y0 = bounds.top.floor().max(0.0) as i32;
    let x1 = bounds.right.ceil().min(img.width() as f32) as i32;
    let y1 = bounds.bottom.ceil().min(img.height() as f32) as i32;

    for y in y0..y1 {
        for x in x0..x1 {
            let d = sdf(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (0.5 - d).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(img, x, y, color, coverage);
            }
        }
    }
}

fn sd_rounded_rect(px: f32, py: f32, rect: &Rect, radius: f32) -> f32 {
    let (cx, cy) = rect.center();
    let hw = rect.width() / 2.0;
    let hh = rect.height() / 2.0;
    let r = radius.min(hw).min(hh).max(0.0);
    let qx = (px - cx).abs() - (hw - r);
    let qy = (py - cy).abs() - (hh - r);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - r
}

/// Approximate distance to an axis-aligned ellipse. Exact for circles.
fn sd_ellipse(px: f32, py: f32, rect: &Rect) -> f32 {
    let (cx, cy) = rect.center();
    let rx = (rect.width() / 2.0).max(f32::EPSILON);
    let ry = (rect.height() / 2.0).max(f32::EPSILON);
    let nx = (px - cx) / rx;
    let ny = (py - cy) / ry;
    ((nx * nx + ny * ny).sqrt() - 1.0) * rx.min(ry)
}

fn sd_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32), half_width: f32) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let (apx, apy) = (px - a.0, py - a.1);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (apx - abx * t, apy - aby * t);
    (dx * dx + dy * dy).sqrt() - half_width
}

/// Band of width `width` lying just inside the shape boundary
fn inner_stroke(d: f32, width: f32) -> f32 {
    d.max(-(d + width))
}

pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    fill_rounded_rect(img, rect, 0.0, color);
}

pub fn fill_rounded_rect(img: &mut RgbaImage, rect: Rect, radius: f32, color: Rgba<u8>) {
    fill_sdf(img, rect, color, |x, y| sd_rounded_rect(x, y, &rect, radius));
}

pub fn stroke_rounded_rect(
    img: &mut RgbaImage,
    rect: Rect,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    fill_sdf(img, rect, color, |x, y| {
        inner_stroke(sd_rounded_rect(x, y, &rect, radius), width)
    });
}

pub fn fill_ellipse(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    fill_sdf(img, rect, color, |x, y| sd_ellipse(x, y, &rect));
}

pub fn stroke_ellipse(img: &mut RgbaImage, rect: Rect, width: f32, color: Rgba<u8>) {
    fill_sdf(img, rect, color, |x, y| {
        inner_stroke(sd_ellipse(x, y, &rect), width)
    });
}

/// Thick segment with round caps
pub fn draw_line(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let half = width / 2.0;
    let bounds = Rect::new(
        from.0.min(to.0) - half,
        from.1.min(to.1) - half,
        from.0.max(to.0) + half,
        from.1.max(to.1) + half,
    );
    fill_sdf(img, bounds, color, |x, y| sd_segment(x, y, from, to, half));
}

/// Stroke the part of the ellipse inscribed in `rect` that runs clockwise
/// from `start` to `end` degrees, 0° pointing right. `end < start` wraps
/// past 360°.
pub fn stroke_arc(
    img: &mut RgbaImage,
    rect: Rect,
    start: f32,
    end: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let start = start.rem_euclid(360.0);
    let mut sweep = end.rem_euclid(360.0) - start;
    if sweep <= 0.0 {
        sweep += 360.0;
    }
    let (cx, cy) = rect.center();
    let rx = (rect.width() / 2.0).max(f32::EPSILON);
    let ry = (rect.height() / 2.0).max(f32::EPSILON);

    fill_sdf(img, rect, color, |x, y| {
        // Angle in the ellipse's own parameter space so the cut lines follow
        // the ellipse rather than a circle.
        let angle = ((y - cy) / ry).atan2((x - cx) / rx) * 180.0 / PI;
        let offset = (angle - start).rem_euclid(360.0);
        if offset > sweep {
            return f32::MAX;
        }
        inner_stroke(sd_ellipse(x, y, &rect), width)
    });
}

/// Linear interpolation between two colors, truncating like an integer cast
pub fn lerp_color(top: [u8; 3], bottom: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for c in 0..3 {
        let a = top[c] as f32;
        let b = bottom[c] as f32;
        out[c] = (a + (b - a) * t) as u8;
    }
    out
}

/// Paint every row with the color interpolated at `y / height`
pub fn fill_vertical_gradient(img: &mut RgbaImage, top: [u8; 3], bottom: [u8; 3]) {
    let height = img.height().max(1) as f32;
    for (y, row) in img.enumerate_rows_mut() {
        let [r, g, b] = lerp_color(top, bottom, y as f32 / height);
        for (_, _, pixel) in row {
            *pixel = Rgba([r, g, b, 255]);
        }
    }
}

/// Composite every pixel over an opaque `matte` and drop the alpha channel
pub fn flatten(img: &RgbaImage, matte: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y);
        let a = p[3] as f32 / 255.0;
        let mut out = [0u8; 3];
        for c in 0..3 {
            out[c] = (p[c] as f32 * a + matte[c] as f32 * (1.0 - a)).round() as u8;
        }
        Rgb(out)
    })
}
