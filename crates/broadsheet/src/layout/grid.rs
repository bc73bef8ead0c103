//! Occupancy grid — the page as a rows × columns array of FREE/OCCUPIED cells.
//!
//! The grid knows nothing about articles; it only answers whether rectangular
//! regions are free and commits them once a caller has decided to place
//! something. Every search branch owns its own `Grid` clone — grids are never
//! shared between branches.

use crate::errors::LayoutError;

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Occupied,
}

/// A rectangular occupancy grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell FREE.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Free; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Coordinates of the first FREE cell in row-major scan order
    /// (top-left to bottom-right), or `None` when the grid is full.
    pub fn first_free_cell(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == Cell::Free)
            .map(|i| (i / self.cols, i % self.cols))
    }

    pub fn free_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Free).count()
    }

    /// True iff the rectangle lies entirely within the grid boundary.
    pub fn region_fits(&self, row: usize, col: usize, height: usize, width: usize) -> bool {
        row + height <= self.rows && col + width <= self.cols
    }

    /// True iff every cell of the rectangle is FREE.
    ///
    /// An out-of-bounds rectangle is an error, never a silent `false`.
    pub fn region_is_free(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> Result<bool, LayoutError> {
        self.check_bounds(row, col, height, width)?;
        Ok(self.region_free_unchecked(row, col, height, width))
    }

    /// Marks the rectangle OCCUPIED. Only valid after `region_is_free`
    /// returned `Ok(true)`; occupied cells never revert to FREE.
    pub fn commit(
        &mut self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> Result<(), LayoutError> {
        self.check_bounds(row, col, height, width)?;
        self.fill_region(row, col, height, width);
        Ok(())
    }

    fn check_bounds(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> Result<(), LayoutError> {
        if self.region_fits(row, col, height, width) {
            Ok(())
        } else {
            Err(LayoutError::OutOfBounds {
                row,
                col,
                height,
                width,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Bounds-unchecked variant of `region_is_free` for internal hot paths.
    /// Callers must have verified `region_fits` first.
    pub(crate) fn region_free_unchecked(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> bool {
        debug_assert!(self.region_fits(row, col, height, width));
        (row..row + height)
            .all(|r| (col..col + width).all(|c| self.cell(r, c) == Cell::Free))
    }

    /// Bounds-unchecked commit for internal hot paths.
    pub(crate) fn fill_region(&mut self, row: usize, col: usize, height: usize, width: usize) {
        debug_assert!(self.region_fits(row, col, height, width));
        for r in row..row + height {
            for c in col..col + width {
                self.cells[r * self.cols + c] = Cell::Occupied;
            }
        }
    }

    /// 2-D prefix sums of the free cells, for sliding-window match scores.
    pub(crate) fn free_cell_sums(&self) -> FreeCellSums {
        let mut sums = vec![0usize; (self.rows + 1) * (self.cols + 1)];
        let stride = self.cols + 1;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let free = (self.cell(r, c) == Cell::Free) as usize;
                sums[(r + 1) * stride + (c + 1)] =
                    free + sums[r * stride + (c + 1)] + sums[(r + 1) * stride + c]
                        - sums[r * stride + c];
            }
        }
        FreeCellSums { stride, sums }
    }
}

/// Integral image over the free cells of a grid snapshot.
///
/// `window_sum` is the valid-mode cross-correlation of the occupancy grid
/// against an all-ones kernel: the number of FREE cells under the window.
pub(crate) struct FreeCellSums {
    stride: usize,
    sums: Vec<usize>,
}

impl FreeCellSums {
    pub(crate) fn window_sum(&self, row: usize, col: usize, height: usize, width: usize) -> usize {
        let (r0, c0, r1, c1) = (row, col, row + height, col + width);
        self.sums[r1 * self.stride + c1] + self.sums[r0 * self.stride + c0]
            - self.sums[r0 * self.stride + c1]
            - self.sums[r1 * self.stride + c0]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
