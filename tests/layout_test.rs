use rich_menu_gen::layout::{Bounds, Grid, CANVAS_HEIGHT, CANVAS_WIDTH};
use rich_menu_gen::menu::{Style, CELLS};

#[test]
fn test_default_grid_has_six_equal_cells() {
    let grid = Grid::default();
    assert_eq!(grid.cell_count(), 6);
    assert_eq!(grid.cell_count(), CELLS.len());

    let cells: Vec<Bounds> = grid.cells().collect();
    for cell in &cells {
        assert_eq!((cell.width, cell.height), (833, 843));
        assert!(cell.right() <= CANVAS_WIDTH);
        assert!(cell.bottom() <= CANVAS_HEIGHT);
    }

    // Row-major: 3 columns, then the second row
    assert_eq!((cells[0].x, cells[0].y), (0, 0));
    assert_eq!((cells[2].x, cells[2].y), (1666, 0));
    assert_eq!((cells[3].x, cells[3].y), (0, 843));
    assert_eq!((cells[5].x, cells[5].y), (1666, 843));
}

#[test]
fn test_cells_do_not_overlap() {
    let grid = Grid::default();
    let cells: Vec<Bounds> = grid.cells().collect();
    for (i, a) in cells.iter().enumerate() {
        for b in cells.iter().skip(i + 1) {
            assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_cards_share_consistent_padding() {
    let grid = Grid::default();
    for style in [Style::Badge, Style::Glyph, Style::Emoji] {
        let padding = style.theme().padding;
        for i in 0..grid.cell_count() {
            let cell = grid.cell(i);
            let card = grid.card(i, padding);
            assert_eq!(card.x - cell.x, padding);
            assert_eq!(card.y - cell.y, padding);
            assert_eq!(cell.right() - card.right(), padding);
            assert_eq!(cell.bottom() - card.bottom(), padding);
        }
    }
}

#[test]
fn test_tap_areas_tile_the_canvas() {
    let grid = Grid::default();
    let areas: Vec<Bounds> = grid.tap_areas().collect();

    let widths: Vec<u32> = areas.iter().take(3).map(|a| a.width).collect();
    assert_eq!(widths, vec![833, 834, 833]);
    assert!(areas.iter().all(|a| a.height == 843));

    let total: u64 = areas
        .iter()
        .map(|a| u64::from(a.width) * u64::from(a.height))
        .sum();
    assert_eq!(total, u64::from(CANVAS_WIDTH) * u64::from(CANVAS_HEIGHT));

    for (i, a) in areas.iter().enumerate() {
        for b in areas.iter().skip(i + 1) {
            assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
        }
    }

    // Every corner pixel belongs to exactly one area
    let (w, h) = (CANVAS_WIDTH, CANVAS_HEIGHT);
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(areas.iter().filter(|a| a.contains(x, y)).count(), 1);
    }
}

#[test]
fn test_inset_never_underflows() {
    let b = Bounds::new(10, 10, 30, 8);
    let inset = b.inset(20);
    assert_eq!(inset.width, 0);
    assert_eq!(inset.height, 0);
    assert_eq!(inset.center(), b.center());
}

#[test]
fn test_grid_clamps_zero_dimensions() {
    let grid = Grid::new(100, 100, 0, 0);
    assert_eq!(grid.cell_count(), 1);
    assert_eq!(grid.cell(0), Bounds::new(0, 0, 100, 100));
}
