//! Grid module - manages the gem grid
//!
//! The grid is a rows x cols field where each cell is empty or holds a gem.
//! Uses a flat array for better cache locality; cells are addressed by
//! (x, y) with x in 0..cols (left to right) and y in 0..rows (top to
//! bottom). Dimensions are fixed at construction.
//!
//! Gems move between cells by exchanging colors (`swap_gems`); cell slots
//! themselves never move, so a position index stays valid for the lifetime
//! of the grid.

use same_game_types::{Cell, GemLayout};

/// The gem grid - runtime-sized, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid from an explicit fully-active layout
    pub fn from_layout(layout: &GemLayout) -> Self {
        Self {
            rows: layout.rows(),
            cols: layout.cols(),
            cells: layout.gems().iter().copied().map(Some).collect(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.cols && y < self.rows {
            Some(y * self.cols + x)
        } else {
            None
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a gem (within bounds and not Empty)
    pub fn is_active(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Exchange the gems of two cells; positions stay fixed
    ///
    /// Out-of-bounds endpoints leave the grid untouched.
    pub fn swap_gems(&mut self, a: (usize, usize), b: (usize, usize)) {
        if let (Some(i), Some(j)) = (self.index(a.0, a.1), self.index(b.0, b.1)) {
            self.cells.swap(i, j);
        }
    }

    /// Check if a column contains no gems
    pub fn is_column_empty(&self, col: usize) -> bool {
        (0..self.rows).all(|y| !self.is_active(col, y))
    }

    /// Exchange the contents of two columns, row by row
    pub fn swap_columns(&mut self, col1: usize, col2: usize) {
        for y in 0..self.rows {
            self.swap_gems((col1, y), (col2, y));
        }
    }

    /// Number of active cells on the grid
    pub fn active_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
