//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (grid logic, rendering collaborators, the
//! pattern codec).
//!
//! # Grid Dimensions
//!
//! Standard SameGame board dimensions:
//!
//! - **Columns**: 15 (indexed 0-14, left to right)
//! - **Rows**: 10 (indexed 0-9, top to bottom)
//!
//! Dimensions are defaults, not hard limits: a grid is built with explicit
//! dimensions and they are immutable afterwards.
//!
//! # Gem Palette
//!
//! Three gem kinds plus the Empty sentinel (`Cell = Option<GemKind>`):
//!
//! | Gem | Pattern letter |
//! |---------|----------------|
//! | Ruby | `R` |
//! | Emerald | `V` |
//! | Diamond | `B` |
//!
//! The letters are the flat pattern-file codes; Empty cells have no letter
//! and never appear in a pattern file.
//!
//! # Examples
//!
//! ```
//! use same_game_types::{GemKind, GemLayout, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(GemKind::from_letter('R'), Some(GemKind::Ruby));
//! assert_eq!(GemKind::Emerald.letter(), 'V');
//!
//! let layout = GemLayout::from_fn(GRID_ROWS, GRID_COLS, |_, _| GemKind::Ruby);
//! assert_eq!(layout.get(0, 0), Some(GemKind::Ruby));
//! assert_eq!(layout.get(GRID_COLS, 0), None);
//! ```

/// Default number of rows (10, indexed top to bottom)
pub const GRID_ROWS: usize = 10;

/// Default number of columns (15, indexed left to right)
pub const GRID_COLS: usize = 15;

/// Number of gem kinds in the palette
pub const GEM_KINDS: usize = 3;

/// The three gem kinds a cell can hold
///
/// The palette order (Ruby, Emerald, Diamond) is also the sampling order for
/// random fills and the index order used by [`GemKind::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemKind {
    Ruby,
    Emerald,
    Diamond,
}

impl GemKind {
    /// All gem kinds in palette order
    pub const ALL: [GemKind; GEM_KINDS] = [GemKind::Ruby, GemKind::Emerald, GemKind::Diamond];

    /// Palette index of this gem kind
    pub fn index(self) -> usize {
        match self {
            GemKind::Ruby => 0,
            GemKind::Emerald => 1,
            GemKind::Diamond => 2,
        }
    }

    /// Gem kind for a palette index
    ///
    /// # Examples
    ///
    /// ```
    /// use same_game_types::GemKind;
    ///
    /// assert_eq!(GemKind::from_index(0), Some(GemKind::Ruby));
    /// assert_eq!(GemKind::from_index(3), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        GemKind::ALL.get(index).copied()
    }

    /// Pattern-file letter code for this gem kind
    pub fn letter(self) -> char {
        match self {
            GemKind::Ruby => 'R',
            GemKind::Emerald => 'V',
            GemKind::Diamond => 'B',
        }
    }

    /// Parse a pattern-file letter code
    ///
    /// # Examples
    ///
    /// ```
    /// use same_game_types::GemKind;
    ///
    /// assert_eq!(GemKind::from_letter('V'), Some(GemKind::Emerald));
    /// assert_eq!(GemKind::from_letter('X'), None);
    /// ```
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(GemKind::Ruby),
            'V' => Some(GemKind::Emerald),
            'B' => Some(GemKind::Diamond),
            _ => None,
        }
    }
}

/// A cell on the grid
///
/// - `None`: the Empty sentinel
/// - `Some(GemKind)`: an active cell holding a gem
///
/// Used by the grid as a flat array of cells.
pub type Cell = Option<GemKind>;

/// A fully-active rows x cols color matrix
///
/// This is the shape of a freshly populated board: every cell holds a gem,
/// none are Empty. It serves three roles:
///
/// - explicit construction input for an engine (a predefined board),
/// - the layout captured right after a board is populated (what the export
///   pathway serializes),
/// - the in-memory form the pattern codec parses to and renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemLayout {
    rows: usize,
    cols: usize,
    gems: Vec<GemKind>,
}

impl GemLayout {
    /// Create a layout from a flat row-major gem vector
    ///
    /// # Panics
    ///
    /// Panics if `gems.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, gems: Vec<GemKind>) -> Self {
        assert_eq!(gems.len(), rows * cols, "layout size mismatch");
        Self { rows, cols, gems }
    }

    /// Create a layout by evaluating `f(x, y)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> GemKind) -> Self {
        let mut gems = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                gems.push(f(x, y));
            }
        }
        Self { rows, cols, gems }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gem at position (x, y), or `None` if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<GemKind> {
        if x < self.cols && y < self.rows {
            Some(self.gems[y * self.cols + x])
        } else {
            None
        }
    }

    /// Flat row-major gem slice
    pub fn gems(&self) -> &[GemKind] {
        &self.gems
    }

    /// Iterate over the rows of the layout, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[GemKind]> {
        self.gems.chunks(self.cols)
    }
}
