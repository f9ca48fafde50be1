//! Font discovery and text rendering
//!
//! Outline fonts are located by probing a fixed list of system font files.
//! When none of them is usable a tiny built-in bitmap font takes over so the
//! menu can always be rendered, just with uglier (ASCII-only) text.

use crate::draw::blend_pixel;
use crate::menu::CELLS;
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::fmt;
use std::path::{Path, PathBuf};

/// CJK-capable text fonts, most preferred first
pub const TEXT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Monochrome symbol fonts for the emoji style
pub const SYMBOL_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/google-noto-emoji/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/truetype/ancient-scripts/Symbola_hint.ttf",
    "/System/Library/Fonts/Apple Symbols.ttf",
    "C:\\Windows\\Fonts\\seguisym.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Ink extent of a piece of text, relative to the point it is drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A renderable typeface
pub enum Face {
    /// A parsed outline font and the file it came from
    Outline {
        font: Font<'static>,
        path: PathBuf,
    },
    /// The built-in 5x7 bitmap font
    Bitmap,
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Outline { path, .. } => write!(f, "Face::Outline({})", path.display()),
            Face::Bitmap => f.write_str("Face::Bitmap"),
        }
    }
}

impl Face {
    /// Read and parse an outline font. Collections (.ttc) use their first face.
    pub fn from_file(path: &Path) -> Result<Face> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        let font = Font::try_from_vec(data)
            .with_context(|| format!("Failed to parse font {}", path.display()))?;
        Ok(Face::Outline {
            font,
            path: path.to_path_buf(),
        })
    }

    /// First usable font among `candidates`. Missing files are skipped
    /// quietly, broken ones with a warning.
    pub fn probe<P: AsRef<Path>>(candidates: &[P]) -> Option<Face> {
        Face::probe_covering(candidates, "")
    }

    /// Like [`Face::probe`], but prefers the first font that has a glyph for
    /// every character of `sample`. Without one, the first usable font wins.
    pub fn probe_covering<P: AsRef<Path>>(candidates: &[P], sample: &str) -> Option<Face> {
        let mut partial: Option<Face> = None;
        for candidate in candidates {
            let path = candidate.as_ref();
            if !path.exists() {
                log::debug!("Font not found, skipping: {}", path.display());
                continue;
            }
            match Face::from_file(path) {
                Ok(face) if face.covers(sample) => {
                    log::info!("Using font {}", path.display());
                    return Some(face);
                }
                Ok(face) => {
                    log::debug!("Font {} lacks some menu characters", path.display());
                    partial.get_or_insert(face);
                }
                Err(e) => log::warn!("{e:#}"),
            }
        }
        if let Some(face) = &partial {
            log::info!("Using font {} (some characters missing)", face.source());
        }
        partial
    }

    /// Human-readable origin of the face
    pub fn source(&self) -> String {
        match self {
            Face::Outline { path, .. } => path.display().to_string(),
            Face::Bitmap => "built-in bitmap font".to_string(),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, Face::Bitmap)
    }

    /// Whether the face has a real glyph for `c` (not the missing-glyph box)
    pub fn has_glyph(&self, c: char) -> bool {
        match self {
            Face::Outline { font, .. } => font.glyph(c).id().0 != 0,
            Face::Bitmap => bitmap_glyph(c).is_some(),
        }
    }

    /// Whether every character of `text` other than whitespace has a glyph
    pub fn covers(&self, text: &str) -> bool {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| self.has_glyph(c))
    }

    /// Ink box of `text` at `size` pixels, drawn with its top edge at y = 0
    pub fn measure(&self, text: &str, size: f32) -> TextBox {
        match self {
            Face::Outline { font, .. } => {
                let glyphs = layout(font, text, size, 0.0, 0.0);
                let mut bbox: Option<TextBox> = None;
                for glyph in &glyphs {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        let b = bbox.get_or_insert(TextBox {
                            left: bb.min.x,
                            top: bb.min.y,
                            right: bb.max.x,
                            bottom: bb.max.y,
                        });
                        b.left = b.left.min(bb.min.x);
                        b.top = b.top.min(bb.min.y);
                        b.right = b.right.max(bb.max.x);
                        b.bottom = b.bottom.max(bb.max.y);
                    }
                }
                bbox.unwrap_or_default()
            }
            Face::Bitmap => {
                let s = bitmap_scale(size);
                let count = text.chars().count() as i32;
                if count == 0 {
                    return TextBox::default();
                }
                TextBox {
                    left: 0,
                    top: 0,
                    right: count * BITMAP_ADVANCE * s - s,
                    bottom: BITMAP_ROWS * s,
                }
            }
        }
    }

    /// Draw `text` with its top edge at `y` and its pen starting at `x`
    pub fn draw(
        &self,
        img: &mut RgbaImage,
        x: f32,
        y: f32,
        text: &str,
        size: f32,
        color: Rgba<u8>,
    ) {
        match self {
            Face::Outline { font, .. } => {
                for glyph in layout(font, text, size, x, y) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, v| {
                            blend_pixel(img, bb.min.x + gx as i32, bb.min.y + gy as i32, color, v);
                        });
                    }
                }
            }
            Face::Bitmap => {
                draw_bitmap_text(img, x.round() as i32, y.round() as i32, text, size, color)
            }
        }
    }

    /// Draw `text` horizontally centered on `cx` by its ink width
    pub fn draw_centered(
        &self,
        img: &mut RgbaImage,
        cx: f32,
        y: f32,
        text: &str,
        size: f32,
        color: Rgba<u8>,
    ) {
        let bbox = self.measure(text, size);
        let x = cx - (bbox.width() / 2) as f32 - bbox.left as f32;
        self.draw(img, x, y, text, size, color);
    }
}

fn layout(
    font: &Font<'static>,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
) -> Vec<PositionedGlyph<'static>> {
    let scale = Scale::uniform(size);
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(x, y + ascent)).collect()
}

/// Fonts used for one render
#[derive(Debug)]
pub struct FontSet {
    /// Labels, abbreviations and descriptions
    pub text: Face,
    /// Emoji-style icons; `None` means every icon falls back to vector art
    pub symbols: Option<Face>,
}

impl FontSet {
    /// Use `preferred` when it parses, otherwise probe the system font lists
    pub fn discover(preferred: Option<&Path>) -> FontSet {
        let preferred = preferred.and_then(|path| match Face::from_file(path) {
            Ok(face) => {
                log::info!("Using font {}", path.display());
                Some(face)
            }
            Err(e) => {
                log::warn!("{e:#}");
                None
            }
        });
        match preferred {
            Some(text) => FontSet {
                text,
                symbols: Face::probe_covering(SYMBOL_FONT_PATHS, &symbol_sample()),
            },
            None => FontSet::from_candidates(TEXT_FONT_PATHS, SYMBOL_FONT_PATHS),
        }
    }

    /// Probe both lists, preferring fonts that can draw every menu character
    pub fn from_candidates<P, Q>(text: &[P], symbols: &[Q]) -> FontSet
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let text = Face::probe_covering(text, &text_sample()).unwrap_or_else(|| {
            log::warn!("No usable system font found, falling back to the built-in bitmap font");
            Face::Bitmap
        });
        let symbols = Face::probe_covering(symbols, &symbol_sample());
        FontSet { text, symbols }
    }

    /// Bitmap text and no symbol font
    pub fn builtin() -> FontSet {
        FontSet {
            text: Face::Bitmap,
            symbols: None,
        }
    }
}

// Every character the text face may be asked to draw
fn text_sample() -> String {
    let mut sample = String::new();
    for cell in &CELLS {
        sample.push_str(cell.label);
        sample.push_str(cell.glyph_label);
        sample.extend(cell.abbreviation);
        sample.extend(cell.description);
    }
    sample
}

fn symbol_sample() -> String {
    CELLS.iter().map(|cell| cell.emoji).collect()
}

// Built-in 5x7 bitmap font, printable ASCII. Each row keeps its 5 pixels in
// the low bits, MSB on the left.

const BITMAP_COLS: i32 = 5;
const BITMAP_ROWS: i32 = 7;
const BITMAP_ADVANCE: i32 = 6;

fn bitmap_scale(size: f32) -> i32 {
    ((size / 9.0).round() as i32).max(1)
}

fn bitmap_glyph(c: char) -> Option<&'static [u8; 7]> {
    let code = c as u32;
    if (32..=126).contains(&code) {
        Some(&FONT_5X7[(code - 32) as usize])
    } else {
        None
    }
}

fn draw_bitmap_text(img: &mut RgbaImage, x: i32, y: i32, text: &str, size: f32, color: Rgba<u8>) {
    let s = bitmap_scale(size);
    for (i, c) in text.chars().enumerate() {
        let gx = x + i as i32 * BITMAP_ADVANCE * s;
        for row in 0..BITMAP_ROWS {
            for col in 0..BITMAP_COLS {
                let on = match bitmap_glyph(c) {
                    Some(rows) => rows[row as usize] & (0x10 >> col) != 0,
                    // Hollow box for anything outside ASCII
                    None => {
                        row == 0 || row == BITMAP_ROWS - 1 || col == 0 || col == BITMAP_COLS - 1
                    }
                };
                if !on {
                    continue;
                }
                for dy in 0..s {
                    for dx in 0..s {
                        blend_pixel(img, gx + col * s + dx, y + row * s + dy, color, 1.0);
                    }
                }
            }
        }
    }
}

#[rustfmt::skip]
const FONT_5X7: [[u8; 7]; 95] = [
    [0x00,0x00,0x00,0x00,0x00,0x00,0x00], // ' '
    [0x04,0x04,0x04,0x04,0x04,0x00,0x04], // '!'
    [0x0A,0x0A,0x0A,0x00,0x00,0x00,0x00], // '"'
    [0x0A,0x0A,0x1F,0x0A,0x1F,0x0A,0x0A], // '#'
    [0x04,0x0F,0x14,0x0E,0x05,0x1E,0x04], // '$'
    [0x18,0x19,0x02,0x04,0x08,0x13,0x03], // '%'
    [0x0C,0x12,0x14,0x08,0x15,0x12,0x0D], // '&'
    [0x04,0x04,0x08,0x00,0x00,0x00,0x00], // '''
    [0x02,0x04,0x08,0x08,0x08,0x04,0x02], // '('
    [0x08,0x04,0x02,0x02,0x02,0x04,0x08], // ')'
    [0x00,0x04,0x15,0x0E,0x15,0x04,0x00], // '*'
    [0x00,0x04,0x04,0x1F,0x04,0x04,0x00], // '+'
    [0x00,0x00,0x00,0x00,0x00,0x04,0x08], // ','
    [0x00,0x00,0x00,0x1F,0x00,0x00,0x00], // '-'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x04], // '.'
    [0x00,0x01,0x02,0x04,0x08,0x10,0x00], // '/'
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // '0'
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // '1'
    [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F], // '2'
    [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E], // '3'
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // '4'
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // '5'
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // '6'
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // '7'
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // '8'
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // '9'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x00], // ':'
    [0x00,0x00,0x04,0x00,0x00,0x04,0x08], // ';'
    [0x02,0x04,0x08,0x10,0x08,0x04,0x02], // '<'
    [0x00,0x00,0x1F,0x00,0x1F,0x00,0x00], // '='
    [0x08,0x04,0x02,0x01,0x02,0x04,0x08], // '>'
    [0x0E,0x11,0x01,0x02,0x04,0x00,0x04], // '?'
    [0x0E,0x11,0x17,0x15,0x17,0x10,0x0E], // '@'
    [0x0E,0x11,0x11,0x1F,0x11,0x11,0x11], // 'A'
    [0x1E,0x11,0x11,0x1E,0x11,0x11,0x1E], // 'B'
    [0x0E,0x11,0x10,0x10,0x10,0x11,0x0E], // 'C'
    [0x1C,0x12,0x11,0x11,0x11,0x12,0x1C], // 'D'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F], // 'E'
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x10], // 'F'
    [0x0E,0x11,0x10,0x17,0x11,0x11,0x0F], // 'G'
    [0x11,0x11,0x11,0x1F,0x11,0x11,0x11], // 'H'
    [0x0E,0x04,0x04,0x04,0x04,0x04,0x0E], // 'I'
    [0x07,0x02,0x02,0x02,0x02,0x12,0x0C], // 'J'
    [0x11,0x12,0x14,0x18,0x14,0x12,0x11], // 'K'
    [0x10,0x10,0x10,0x10,0x10,0x10,0x1F], // 'L'
    [0x11,0x1B,0x15,0x15,0x11,0x11,0x11], // 'M'
    [0x11,0x11,0x19,0x15,0x13,0x11,0x11], // 'N'
    [0x0E,0x11,0x11,0x11,0x11,0x11,0x0E], // 'O'
    [0x1E,0x11,0x11,0x1E,0x10,0x10,0x10], // 'P'
    [0x0E,0x11,0x11,0x11,0x15,0x12,0x0D], // 'Q'
    [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11], // 'R'
    [0x0F,0x10,0x10,0x0E,0x01,0x01,0x1E], // 'S'
    [0x1F,0x04,0x04,0x04,0x04,0x04,0x04], // 'T'
    [0x11,0x11,0x11,0x11,0x11,0x11,0x0E], // 'U'
    [0x11,0x11,0x11,0x11,0x11,0x0A,0x04], // 'V'
    [0x11,0x11,0x11,0x15,0x15,0x1B,0x11], // 'W'
    [0x11,0x11,0x0A,0x04,0x0A,0x11,0x11], // 'X'
    [0x11,0x11,0x0A,0x04,0x04,0x04,0x04], // 'Y'
    [0x1F,0x01,0x02,0x04,0x08,0x10,0x1F], // 'Z'
    [0x0E,0x08,0x08,0x08,0x08,0x08,0x0E], // '['
    [0x00,0x10,0x08,0x04,0x02,0x01,0x00], // '\'
    [0x0E,0x02,0x02,0x02,0x02,0x02,0x0E], // ']'
    [0x04,0x0A,0x11,0x00,0x00,0x00,0x00], // '^'
    [0x00,0x00,0x00,0x00,0x00,0x00,0x1F], // '_'
    [0x08,0x04,0x02,0x00,0x00,0x00,0x00], // '`'
    [0x00,0x00,0x0E,0x01,0x0F,0x11,0x0F], // 'a'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x1E], // 'b'
    [0x00,0x00,0x0E,0x10,0x10,0x11,0x0E], // 'c'
    [0x01,0x01,0x0D,0x13,0x11,0x11,0x0F], // 'd'
    [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E], // 'e'
    [0x06,0x09,0x08,0x1C,0x08,0x08,0x08], // 'f'
    [0x00,0x00,0x0F,0x11,0x0F,0x01,0x0E], // 'g'
    [0x10,0x10,0x16,0x19,0x11,0x11,0x11], // 'h'
    [0x04,0x00,0x0C,0x04,0x04,0x04,0x0E], // 'i'
    [0x02,0x00,0x06,0x02,0x02,0x12,0x0C], // 'j'
    [0x10,0x10,0x12,0x14,0x18,0x14,0x12], // 'k'
    [0x0C,0x04,0x04,0x04,0x04,0x04,0x0E], // 'l'
    [0x00,0x00,0x1A,0x15,0x15,0x11,0x11], // 'm'
    [0x00,0x00,0x16,0x19,0x11,0x11,0x11], // 'n'
    [0x00,0x00,0x0E,0x11,0x11,0x11,0x0E], // 'o'
    [0x00,0x00,0x1E,0x11,0x1E,0x10,0x10], // 'p'
    [0x00,0x00,0x0D,0x13,0x0F,0x01,0x01], // 'q'
    [0x00,0x00,0x16,0x19,0x10,0x10,0x10], // 'r'
    [0x00,0x00,0x0E,0x10,0x0E,0x01,0x1E], // 's'
    [0x08,0x08,0x1C,0x08,0x08,0x09,0x06], // 't'
    [0x00,0x00,0x11,0x11,0x11,0x13,0x0D], // 'u'
    [0x00,0x00,0x11,0x11,0x11,0x0A,0x04], // 'v'
    [0x00,0x00,0x11,0x11,0x15,0x15,0x0A], // 'w'
    [0x00,0x00,0x11,0x0A,0x04,0x0A,0x11], // 'x'
    [0x00,0x00,0x11,0x11,0x0F,0x01,0x0E], // 'y'
    [0x00,0x00,0x1F,0x02,0x04,0x08,0x1F], // 'z'
    [0x02,0x04,0x04,0x08,0x04,0x04,0x02], // '{'
    [0x04,0x04,0x04,0x04,0x04,0x04,0x04], // '|'
    [0x08,0x04,0x04,0x02,0x04,0x04,0x08], // '}'
    [0x00,0x00,0x08,0x15,0x02,0x00,0x00], // '~'
];
