use crate::draw::{
    fill_ellipse, fill_rounded_rect, fill_vertical_gradient, flatten, stroke_rounded_rect, Rect,
};
use crate::font::FontSet;
use crate::icons::draw_icon;
use crate::layout::{Bounds, Grid};
use crate::menu::{MenuCell, Style, Theme, CELLS};
use crate::menu_json::{write_menu_json, RichMenu};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where the image lands when no output path is given
pub const DEFAULT_OUTPUT: &str = "storage/rich_menu.png";
/// Frontend origin used for the tap actions in the menu JSON
pub const DEFAULT_BASE_URL: &str = "https://example.com";

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const MATTE: Rgb<u8> = Rgb([0, 0, 0]);

#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    pub style: Style,
    /// Font file tried before the built-in probe list
    pub font: Option<PathBuf>,
    /// Also write the rich menu definition here
    pub menu_json: Option<PathBuf>,
    pub base_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            style: Style::default(),
            font: None,
            menu_json: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// What a generator run produced
#[derive(Debug, Clone)]
pub struct Report {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Size of the written PNG file
    pub bytes: u64,
    pub style: Style,
    /// Font file used for text, or the bitmap fallback
    pub font_source: String,
}

pub fn generate_rich_menu(options: &Options) -> Result<Report> {
    let fonts = FontSet::discover(options.font.as_deref());
    generate_with_fonts(options, &fonts)
}

/// Same as [`generate_rich_menu`] with an already resolved font set
pub fn generate_with_fonts(options: &Options, fonts: &FontSet) -> Result<Report> {
    let grid = Grid::default();

    println!("Rendering rich menu ({} style)...", options.style);
    let canvas = render_menu_on(&grid, &CELLS, options.style, fonts);
    println!("  ✓ Rendered {} cells", grid.cell_count());

    let flat = flatten(&canvas, MATTE);
    let bytes = save_png(&flat, &options.output)?;
    println!("  ✓ Wrote {}", options.output.display());

    if let Some(json_path) = &options.menu_json {
        let menu = RichMenu::from_cells(&grid, &CELLS, &options.base_url);
        write_menu_json(json_path, &menu)?;
        println!("  ✓ Wrote {}", json_path.display());
    }

    Ok(Report {
        output: options.output.clone(),
        width: flat.width(),
        height: flat.height(),
        bytes,
        style: options.style,
        font_source: fonts.text.source(),
    })
}

/// Render the fixed six-cell menu on the default 2500x1686 grid
pub fn render_menu(style: Style, fonts: &FontSet) -> RgbaImage {
    render_menu_on(&Grid::default(), &CELLS, style, fonts)
}

/// Render `cells` onto a fresh canvas sized by `grid`. Cells beyond the
/// grid's capacity are ignored.
pub fn render_menu_on(
    grid: &Grid,
    cells: &[MenuCell],
    style: Style,
    fonts: &FontSet,
) -> RgbaImage {
    let theme = style.theme();
    let mut canvas = RgbaImage::new(grid.width, grid.height);
    fill_vertical_gradient(&mut canvas, theme.gradient_top, theme.gradient_bottom);

    for (i, cell) in cells.iter().enumerate().take(grid.cell_count()) {
        let card = grid.card(i, theme.padding);
        draw_card(&mut canvas, card, &theme);
        match style {
            Style::Badge => draw_badge_cell(&mut canvas, card, cell, fonts),
            Style::Glyph => draw_glyph_cell(&mut canvas, card, cell, fonts),
            Style::Emoji => draw_emoji_cell(&mut canvas, card, cell, fonts),
        }
    }

    canvas
}

fn card_rect(card: Bounds) -> Rect {
    Rect::new(
        card.x as f32,
        card.y as f32,
        card.right() as f32,
        card.bottom() as f32,
    )
}

fn draw_card(img: &mut RgbaImage, card: Bounds, theme: &Theme) {
    let rect = card_rect(card);
    fill_rounded_rect(img, rect, theme.radius, theme.card_fill);
    stroke_rounded_rect(
        img,
        rect,
        theme.radius,
        theme.card_outline_width,
        theme.card_outline,
    );
}

/// Colored circle with the abbreviation, label and dimmed description
fn draw_badge_cell(img: &mut RgbaImage, card: Bounds, cell: &MenuCell, fonts: &FontSet) {
    let cx = card.x as f32 + (card.width / 2) as f32;
    let cy = card.y as f32 + (card.height as f32 * 0.32).trunc();
    let radius = 90.0;

    let mut circle = cell.badge_color();
    circle[3] = 230;
    fill_ellipse(img, Rect::around(cx, cy, radius), circle);

    if let Some(abbr) = cell.abbreviation {
        let size = 120.0;
        let ink = fonts.text.measure(abbr, size);
        let y = cy - (ink.height() / 2) as f32 - ink.top as f32;
        fonts.text.draw_centered(img, cx, y, abbr, size, WHITE);
    }

    let label_y = card.y as f32 + (card.height as f32 * 0.58).trunc();
    let label = cell.label_for(Style::Badge);
    fonts.text.draw_centered(img, cx, label_y, label, 72.0, WHITE);

    if let Some(desc) = cell.description {
        fonts.text.draw_centered(
            img,
            cx,
            label_y + 85.0,
            desc,
            42.0,
            Rgba([255, 255, 255, 110]),
        );
    }
}

/// White line icon above the label
fn draw_glyph_cell(img: &mut RgbaImage, card: Bounds, cell: &MenuCell, fonts: &FontSet) {
    let (cx, cy) = card.center();
    let (cx, cy) = (cx as f32, cy as f32);
    draw_icon(img, cell.icon, cx, cy - 60.0, 60.0);
    let label = cell.label_for(Style::Glyph);
    fonts.text.draw_centered(img, cx, cy + 45.0, label, 64.0, WHITE);
}

/// Symbol-font glyph above the label, or the line icon when the symbol
/// font is missing or lacks the character
fn draw_emoji_cell(img: &mut RgbaImage, card: Bounds, cell: &MenuCell, fonts: &FontSet) {
    let (cx, cy) = card.center();
    let (cx, cy) = (cx as f32, cy as f32);
    let icon_cy = cy - 60.0;

    match fonts.symbols.as_ref().filter(|f| f.has_glyph(cell.emoji)) {
        Some(face) => {
            let size = 150.0;
            let text = cell.emoji.to_string();
            let ink = face.measure(&text, size);
            let y = icon_cy - (ink.height() / 2) as f32 - ink.top as f32;
            face.draw_centered(img, cx, y, &text, size, WHITE);
        }
        None => {
            log::debug!("No symbol glyph for {:?}, drawing {:?}", cell.emoji, cell.icon);
            draw_icon(img, cell.icon, cx, icon_cy, 60.0);
        }
    }
    let label = cell.label_for(Style::Emoji);
    fonts.text.draw_centered(img, cx, cy + 45.0, label, 64.0, WHITE);
}

/// Encode `image` as PNG at `path`, overwriting any existing file.
/// Returns the size of the written file.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<u64> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image, &mut out_file)?;
    out_file.flush().context("Failed to write PNG")?;
    drop(out_file);

    let bytes = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    Ok(bytes)
}

// Encode RGB8 image data as PNG
fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder =
        PngEncoder::new_with_quality(w, CompressionType::Default, PngFilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .context("Failed to encode PNG")?;
    Ok(())
}
