//! Hand-drawn line icons
//!
//! Each icon is drawn around a center point and scaled by `s`, the icon's
//! half-size in pixels. The pixel offsets inside are tuned for `s = 60`.

use crate::draw::{
    draw_line, fill_ellipse, fill_rect, stroke_arc, stroke_ellipse, stroke_rounded_rect, Rect,
};
use crate::menu::IconKind;
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const DIM: Rgba<u8> = Rgba([255, 255, 255, 180]);

/// Draw `kind` centered on (cx, cy)
pub fn draw_icon(img: &mut RgbaImage, kind: IconKind, cx: f32, cy: f32, s: f32) {
    match kind {
        IconKind::Wrench => draw_wrench(img, cx, cy, s),
        IconKind::Clipboard => draw_clipboard(img, cx, cy, s),
        IconKind::Phone => draw_phone(img, cx, cy, s),
        IconKind::Person => draw_person(img, cx, cy, s),
        IconKind::Gear => draw_gear(img, cx, cy, s),
        IconKind::Coin => draw_coin(img, cx, cy, s),
    }
}

fn draw_wrench(img: &mut RgbaImage, cx: f32, cy: f32, s: f32) {
    // Handle, ring at the lower end, jaw block at the upper end
    draw_line(img, (cx - s, cy - s), (cx + s, cy + s), 8.0, WHITE);
    stroke_ellipse(img, Rect::around(cx + s, cy + s, 14.0), 4.0, WHITE);
    fill_rect(
        img,
        Rect::new(cx - s - 8.0, cy - s - 18.0, cx - s + 8.0, cy - s + 2.0),
        WHITE,
    );
}

fn draw_clipboard(img: &mut RgbaImage, cx: f32, cy: f32, s: f32) {
    stroke_rounded_rect(
        img,
        Rect::new(cx - s + 5.0, cy - s, cx + s - 5.0, cy + s),
        8.0,
        4.0,
        WHITE,
    );
    fill_rect(
        img,
        Rect::new(cx - 12.0, cy - s - 8.0, cx + 12.0, cy - s + 4.0),
        WHITE,
    );
    for i in 0..3 {
        let y = cy - s + 22.0 + i as f32 * 20.0;
        draw_line(img, (cx - s + 18.0, y), (cx + s - 18.0, y), 3.0, DIM);
    }
}

fn draw_phone(img: &mut RgbaImage, cx: f32, cy: f32, s: f32) {
    stroke_rounded_rect(
        img,
        Rect::new(cx - s + 8.0, cy - s + 5.0, cx + s - 8.0, cy + s - 5.0),
        12.0,
        5.0,
        WHITE,
    );
    // Earpiece
    stroke_arc(
        img,
        Rect::new(cx - 20.0, cy - s + 10.0, cx + 20.0, cy - s + 30.0),
        200.0,
        340.0,
        4.0,
        WHITE,
    );
    // Home button
    fill_ellipse(img, Rect::around(cx, cy + s - 16.0, 6.0), WHITE);
}

fn draw_person(img: &mut RgbaImage, cx: f32, cy: f32, s: f32) {
    fill_ellipse(img, Rect::new(cx - 16.0, cy - s, cx + 16.0, cy - s + 32.0), WHITE);
    stroke_arc(
        img,
        Rect::new(cx - s + 10.0, cy - 5.0, cx + s - 10.0, cy + s),
        200.0,
        340.0,
        6.0,
        WHITE,
    );
}

fn draw_gear(img: &mut RgbaImage, cx: f32, cy: f32, s: f32) {
    stroke_ellipse(img, Rect::around(cx, cy, s - 10.0), 5.0, WHITE);
    fill_ellipse(img, Rect::around(cx, cy, 12.0), WHITE);
    for step in 0..8 {
        let rad = (step as f32 * 45.0).to_radians();
        let tx = cx + ((s - 5.0) * rad.cos()).trunc();
        let ty = cy + ((s - 5.0) * rad.sin()).trunc();
        fill_ellipse(img, Rect::around(tx, ty, 6.0), WHITE);
    }
}

fn draw_coin(img: &mut RgbaImage, cx: f32, cy: f32, s: f32) {
    stroke_ellipse(img, Rect::around(cx, cy, s), 5.0, WHITE);
    // Dollar sign: stem plus two opposing half loops
    draw_line(img, (cx, cy - s + 8.0), (cx, cy + s - 8.0), 4.0, WHITE);
    stroke_arc(
        img,
        Rect::new(cx - 18.0, cy - 20.0, cx + 18.0, cy),
        180.0,
        0.0,
        5.0,
        WHITE,
    );
    stroke_arc(
        img,
        Rect::new(cx - 18.0, cy, cx + 18.0, cy + 20.0),
        0.0,
        180.0,
        5.0,
        WHITE,
    );
}
