//! Grid geometry for the rich menu canvas
//!
//! The canvas is split into `cols × rows` cells. Drawing uses equal-size cells
//! (integer division, so a sliver at the right/bottom edge may stay uncovered),
//! while tap areas round the fractional column/row edges so that together they
//! tile the whole canvas, which is what the chat platform expects.

use serde::Serialize;

/// Rich menu canvas width in pixels
pub const CANVAS_WIDTH: u32 = 2500;
/// Rich menu canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 1686;
/// Number of grid columns
pub const COLUMNS: u32 = 3;
/// Number of grid rows
pub const ROWS: u32 = 2;

/// An axis-aligned pixel rectangle
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Center point, rounded down
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Shrink the rectangle by `padding` on every side.
    /// Padding larger than half a dimension collapses that dimension to zero.
    pub fn inset(&self, padding: u32) -> Bounds {
        let dx = padding.min(self.width / 2);
        let dy = padding.min(self.height / 2);
        Bounds {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - dx * 2,
            height: self.height - dy * 2,
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A `cols × rows` partition of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub cols: u32,
    pub rows: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT, COLUMNS, ROWS)
    }
}

impl Grid {
    pub fn new(width: u32, height: u32, cols: u32, rows: u32) -> Self {
        Self {
            width,
            height,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Width and height shared by every drawing cell
    pub fn cell_size(&self) -> (u32, u32) {
        (self.width / self.cols, self.height / self.rows)
    }

    /// Column and row of the cell at `index` (row-major)
    pub fn position(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        (index % self.cols, index / self.cols)
    }

    /// Equal-size drawing cell at `index`
    pub fn cell(&self, index: usize) -> Bounds {
        let (col, row) = self.position(index);
        let (cw, ch) = self.cell_size();
        Bounds::new(col * cw, row * ch, cw, ch)
    }

    /// Cell at `index` shrunk by `padding`; this is where the card goes
    pub fn card(&self, index: usize, padding: u32) -> Bounds {
        self.cell(index).inset(padding)
    }

    /// Tap area at `index`. Adjacent areas share edges and the union of all
    /// areas is the full canvas.
    pub fn tap_area(&self, index: usize) -> Bounds {
        let (col, row) = self.position(index);
        let x0 = edge(self.width, self.cols, col);
        let x1 = edge(self.width, self.cols, col + 1);
        let y0 = edge(self.height, self.rows, row);
        let y1 = edge(self.height, self.rows, row + 1);
        Bounds::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn cells(&self) -> impl Iterator<Item = Bounds> + '_ {
        (0..self.cell_count()).map(move |i| self.cell(i))
    }

    pub fn tap_areas(&self) -> impl Iterator<Item = Bounds> + '_ {
        (0..self.cell_count()).map(move |i| self.tap_area(i))
    }
}

/// Position of the `k`-th of `parts` edges along `total`, rounded half up
fn edge(total: u32, parts: u32, k: u32) -> u32 {
    let scaled = u64::from(total) * u64::from(k) * 2 + u64::from(parts);
    (scaled / (u64::from(parts) * 2)) as u32
}
