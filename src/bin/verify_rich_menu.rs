use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use rich_menu_gen::inspect::{cell_has_content, cell_variances, column_is_monotonic};
use rich_menu_gen::layout::{Grid, CANVAS_HEIGHT, CANVAS_WIDTH, COLUMNS, ROWS};
use rich_menu_gen::rich_menu::DEFAULT_OUTPUT;

// Inside every style's card
const CHECK_PADDING: u32 = 24;
// Left margin column, outside every card
const GRADIENT_COLUMN: u32 = 2;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {}", path))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path))?
        .to_rgb8();

    println!("Checking rich menu: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());

    let mut ok = true;
    if (img.width(), img.height()) != (CANVAS_WIDTH, CANVAS_HEIGHT) {
        println!("⚠ Expected {}x{}", CANVAS_WIDTH, CANVAS_HEIGHT);
        ok = false;
    }

    let grid = Grid::new(img.width(), img.height(), COLUMNS, ROWS);
    println!("\nCells:");
    let variances = cell_variances(&img, &grid, CHECK_PADDING);
    for (i, (card, variance)) in variances.iter().enumerate() {
        let drawn = cell_has_content(&img, *card);
        println!(
            "  {} cell {} at ({}, {}) {}x{}: variance {:.1}",
            if drawn { "✓" } else { "✗" },
            i,
            card.x,
            card.y,
            card.width,
            card.height,
            variance
        );
        ok &= drawn;
    }

    let monotonic = column_is_monotonic(&img, GRADIENT_COLUMN);
    println!(
        "\nBackground gradient at x={}: {}",
        GRADIENT_COLUMN,
        if monotonic { "monotonic" } else { "not monotonic" }
    );
    ok &= monotonic;

    if ok {
        println!("✓ Rich menu looks complete");
        Ok(())
    } else {
        anyhow::bail!("Rich menu check failed for {}", path)
    }
}
