//! Swatch grid geometry.
//!
//! Items are laid out row-major, left to right, top to bottom. Gaps only
//! separate cells, so the canvas has no outer margin:
//!
//! ```text
//! (0,0) ─────────────────────────────► X
//!   │ ┌──────┐ gap_h ┌──────┐ gap_h ┌──────┐
//!   │ │  0   │       │  1   │       │  2   │
//!   │ └──────┘       └──────┘       └──────┘
//!   │   gap_v
//!   │ ┌──────┐
//!   │ │  3   │
//!   ▼ └──────┘
//!   Y
//! ```
//!
//! Inputs are expected to be clamped by the caller; this module does no
//! validation beyond keeping `cols` and `rows` at least 1. Canvas sizes are
//! `u64` so that large palettes cannot overflow here; the rasterizer
//! decides what it can actually allocate.

/// Pixel rectangle occupied by one swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Left edge.
    pub x: u64,
    /// Top edge.
    pub y: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Cell {
    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> u64 {
        self.x + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> u64 {
        self.y + u64::from(self.height)
    }

    /// Returns true if the point lies inside the cell.
    #[inline]
    pub fn contains(&self, x: u64, y: u64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Computed grid for a given item count and swatch geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Columns per row, at least 1.
    pub cols: u64,
    /// Number of rows, at least 1 even for an empty palette.
    pub rows: u64,
    /// Swatch width in pixels.
    pub swatch_width: u32,
    /// Swatch height in pixels.
    pub swatch_height: u32,
    /// Horizontal gap between columns.
    pub gap_h: u32,
    /// Vertical gap between rows.
    pub gap_v: u32,
    /// Total canvas width.
    pub canvas_width: u64,
    /// Total canvas height.
    pub canvas_height: u64,
}

impl GridLayout {
    /// Computes the grid for `count` items with `row_len` items per row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_core::GridLayout;
    ///
    /// let grid = GridLayout::compute(7, 3, 100, 50, 10, 5);
    /// assert_eq!((grid.cols, grid.rows), (3, 3));
    /// assert_eq!(grid.canvas_width, 3 * 100 + 2 * 10);
    /// assert_eq!(grid.position_of(4), (110, 55));
    /// ```
    pub fn compute(
        count: usize,
        row_len: u32,
        swatch_width: u32,
        swatch_height: u32,
        gap_h: u32,
        gap_v: u32,
    ) -> Self {
        let cols = u64::from(row_len.max(1));
        let rows = (count as u64).div_ceil(cols).max(1);

        let canvas_width = cols * u64::from(swatch_width) + (cols - 1) * u64::from(gap_h);
        let canvas_height = rows * u64::from(swatch_height) + (rows - 1) * u64::from(gap_v);

        Self {
            cols,
            rows,
            swatch_width,
            swatch_height,
            gap_h,
            gap_v,
            canvas_width,
            canvas_height,
        }
    }

    /// Top-left corner of the item at sequence position `i`.
    #[inline]
    pub fn position_of(&self, i: usize) -> (u64, u64) {
        let i = i as u64;
        let x = (i % self.cols) * (u64::from(self.swatch_width) + u64::from(self.gap_h));
        let y = (i / self.cols) * (u64::from(self.swatch_height) + u64::from(self.gap_v));
        (x, y)
    }

    /// Full cell rectangle of the item at sequence position `i`.
    pub fn cell(&self, i: usize) -> Cell {
        let (x, y) = self.position_of(i);
        Cell {
            x,
            y,
            width: self.swatch_width,
            height: self.swatch_height,
        }
    }
}
