//! Engine module - grid logic for group removal, gravity, and compaction
//!
//! The engine owns the grid and the current group partition. A *group* is a
//! maximal 4-connected set of same-colored active cells; the partition is
//! recomputed from scratch after every structural change rather than patched
//! incrementally, so group ids are dense `0..K` in row-major discovery order
//! and stay valid only until the next mutation.
//!
//! A full move runs: resolve clicked group, remove it, apply gravity to the
//! touched columns, collapse emptied columns leftward, recompute the
//! partition, and check for the terminal state. [`GridEngine::play`] bundles
//! that sequence; the individual steps stay public so callers and tests can
//! drive and inspect intermediate states.

use arrayvec::ArrayVec;
use thiserror::Error;

use same_game_types::{Cell, GemKind, GemLayout, GRID_COLS, GRID_ROWS};

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::scoring::removal_score;
use crate::snapshot::GridSnapshot;

/// Grid position as (x, y)
pub type Pos = (usize, usize);

/// Neighbor offsets: up, down, left, right (no diagonals)
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Errors surfaced by the engine
///
/// Out-of-bounds coordinates are never errors (reads return `None` and
/// adjacency scans stop at the edges); only a caller presenting a group id
/// that does not belong to the current partition fails loudly, since a stale
/// id means the caller skipped a recompute.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("group id {0} is not assigned in the current partition")]
    UnknownGroup(usize),
}

/// Result of one move against the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cells removed by the move (0 when the click was a no-op)
    pub removed: usize,
    /// Score delta awarded for the removal
    pub score: u32,
    /// True when no removable group remains after the move
    pub game_over: bool,
}

/// The grid engine: cells, group partition, and the counters the UI reads
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    /// Current partition; `groups[id]` lists the member positions.
    groups: Vec<Vec<Pos>>,
    /// Per-cell group ids, flat row-major, parallel to the grid cells.
    /// `None` for Empty cells.
    group_ids: Vec<Option<usize>>,
    /// Active cells left on the board
    remaining_cells: usize,
    /// Columns not yet collapsed away
    available_columns: usize,
    /// Layout captured when the board was populated. The export pathway
    /// serializes this capture, not the live grid.
    initial: GemLayout,
}

impl GridEngine {
    /// Create an engine over a randomly filled rows x cols board
    ///
    /// Every cell is drawn uniformly from the palette; the same seed
    /// reproduces the same board.
    pub fn random(rows: usize, cols: usize, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let layout = GemLayout::from_fn(rows, cols, |_, _| rng.gem());
        Self::from_layout(&layout)
    }

    /// Create an engine over a random board with the default dimensions
    pub fn random_default(seed: u32) -> Self {
        Self::random(GRID_ROWS, GRID_COLS, seed)
    }

    /// Create an engine over an explicit predefined board
    pub fn from_layout(layout: &GemLayout) -> Self {
        let grid = Grid::from_layout(layout);
        let remaining_cells = grid.active_cells();
        let available_columns = grid.cols();

        let mut engine = Self {
            grid,
            groups: Vec::new(),
            group_ids: Vec::new(),
            remaining_cells,
            available_columns,
            initial: layout.clone(),
        };
        engine.recompute_groups();
        engine
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Active cells left on the board
    pub fn remaining_cells(&self) -> usize {
        self.remaining_cells
    }

    /// Columns that still hold (or may hold) gems; collapsed columns are gone
    pub fn available_columns(&self) -> usize {
        self.available_columns
    }

    /// Cell at position (x, y); `None` when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.grid.get(x, y)
    }

    /// Group id of the cell at (x, y)
    ///
    /// `None` for Empty cells and out-of-bounds coordinates. Returned ids
    /// are valid until the next grid mutation.
    pub fn group_id_at(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.grid.cols() && y < self.grid.rows() {
            self.group_ids[self.flat(x, y)]
        } else {
            None
        }
    }

    /// Members of the group with the given id
    ///
    /// Fails on ids outside the current partition rather than returning an
    /// empty group: a stale id is a caller bug, not a playable state.
    pub fn group_by_id(&self, id: usize) -> Result<&[Pos], EngineError> {
        self.groups
            .get(id)
            .map(Vec::as_slice)
            .ok_or(EngineError::UnknownGroup(id))
    }

    /// Number of groups in the current partition
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Group members for the cell at (x, y), for hover highlighting
    ///
    /// Pure read; Empty cells and out-of-bounds coordinates yield an empty
    /// slice.
    pub fn hover_group(&self, x: usize, y: usize) -> &[Pos] {
        match self.group_id_at(x, y) {
            Some(id) => &self.groups[id],
            None => &[],
        }
    }

    /// Maximal set of active cells reachable from (x, y) through
    /// 4-directional same-color adjacency
    ///
    /// Empty for Empty cells and out-of-bounds coordinates. Only the set
    /// membership is meaningful; the traversal order is not part of the
    /// contract.
    pub fn connected_gems(&self, x: usize, y: usize) -> Vec<Pos> {
        let Some(Some(kind)) = self.grid.get(x, y) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.grid.rows() * self.grid.cols()];
        visited[self.flat(x, y)] = true;

        let mut connected = vec![(x, y)];
        let mut cursor = 0;

        while cursor < connected.len() {
            let (cx, cy) = connected[cursor];
            for (nx, ny) in self.direct_same_color(cx, cy, kind) {
                let idx = self.flat(nx, ny);
                if !visited[idx] {
                    visited[idx] = true;
                    connected.push((nx, ny));
                }
            }
            cursor += 1;
        }

        connected
    }

    /// Direct neighbors (up, down, left, right) holding the given gem kind
    fn direct_same_color(&self, x: usize, y: usize, kind: GemKind) -> ArrayVec<Pos, 4> {
        let mut neighbors = ArrayVec::new();
        for (dx, dy) in DIRECTIONS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if self.grid.get(nx, ny) == Some(Some(kind)) {
                neighbors.push((nx, ny));
            }
        }
        neighbors
    }

    /// Rebuild the group partition from scratch
    ///
    /// Scans the grid in row-major order and assigns dense ids `0..K` in
    /// discovery order: the group containing the first unclaimed active cell
    /// gets the next id. Empty cells end up unassigned. Must run after every
    /// structural change; [`GridEngine::play`] and the constructors take
    /// care of that.
    pub fn recompute_groups(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let mut ids: Vec<Option<usize>> = vec![None; rows * cols];
        let mut groups: Vec<Vec<Pos>> = Vec::new();

        for y in 0..rows {
            for x in 0..cols {
                if ids[y * cols + x].is_some() || !self.grid.is_active(x, y) {
                    continue;
                }
                let members = self.connected_gems(x, y);
                let id = groups.len();
                for &(mx, my) in &members {
                    ids[my * cols + mx] = Some(id);
                }
                groups.push(members);
            }
        }

        self.group_ids = ids;
        self.groups = groups;
    }

    /// Remove the group with the given id, returning the removed cell count
    ///
    /// Groups of size 1 are not removable: the call is a no-op returning
    /// `Ok(0)`. Ids outside the current partition fail with
    /// [`EngineError::UnknownGroup`]. Neither gravity nor a recompute runs
    /// here; those are separate steps.
    pub fn remove_group(&mut self, id: usize) -> Result<usize, EngineError> {
        let members = self
            .groups
            .get(id)
            .ok_or(EngineError::UnknownGroup(id))?
            .clone();
        if members.len() <= 1 {
            return Ok(0);
        }
        self.clear_cells(&members);
        Ok(members.len())
    }

    /// Distinct columns touched by the given cells, in order of first
    /// appearance
    pub fn affected_columns(&self, cells: &[Pos]) -> Vec<usize> {
        let mut columns = Vec::new();
        for &(x, _) in cells {
            if !columns.contains(&x) {
                columns.push(x);
            }
        }
        columns
    }

    /// Let gems fall to the bottom of each given column
    ///
    /// Scans a column bottom-to-top; every Empty cell swaps with the
    /// nearest gem above it. Processing upward means slots already filled by
    /// earlier swaps are seen as filled, so one pass settles every gap.
    /// Columns do not interact, their order is irrelevant.
    pub fn apply_gravity(&mut self, columns: &[usize]) {
        for &col in columns {
            if col >= self.grid.cols() {
                continue;
            }
            for y in (0..self.grid.rows()).rev() {
                if self.grid.is_active(col, y) {
                    continue;
                }
                for above in (0..y).rev() {
                    if self.grid.is_active(col, above) {
                        self.grid.swap_gems((col, y), (col, above));
                        break;
                    }
                }
            }
        }
    }

    /// Collapse columns among the candidates that have become entirely Empty
    ///
    /// Candidates are sorted and deduplicated, then checked in ascending
    /// order with indices adjusted for columns already collapsed during this
    /// call (each collapse shifts everything to its right one step left).
    /// An empty column is shifted out by pairwise column swaps toward the
    /// right edge, and `available_columns` drops by one. Only the candidate
    /// columns are examined, not the whole grid.
    pub fn compact_columns(&mut self, columns: &[usize]) {
        let mut candidates = columns.to_vec();
        candidates.sort_unstable();
        candidates.dedup();

        let mut collapsed = 0;
        for col in candidates {
            let current = col - collapsed;
            if current < self.available_columns && self.grid.is_column_empty(current) {
                for j in current..self.available_columns - 1 {
                    self.grid.swap_columns(j, j + 1);
                }
                self.available_columns -= 1;
                collapsed += 1;
            }
        }
    }

    /// True when no group of size > 1 remains: the game-over predicate
    pub fn is_terminal(&self) -> bool {
        self.groups.iter().all(|group| group.len() <= 1)
    }

    /// Execute one full move at the clicked cell
    ///
    /// Clicking an Empty cell, a lone gem, or outside the grid changes
    /// nothing and reports `removed: 0`. Otherwise the clicked group is
    /// removed, the score delta computed, gravity and compaction run over
    /// the touched columns, and the partition is recomputed before the
    /// terminal check.
    pub fn play(&mut self, x: usize, y: usize) -> MoveOutcome {
        let Some(id) = self.group_id_at(x, y) else {
            return self.no_op();
        };

        let members = self.groups[id].clone();
        if members.len() <= 1 {
            return self.no_op();
        }

        self.clear_cells(&members);
        let score = removal_score(members.len());

        let columns = self.affected_columns(&members);
        self.apply_gravity(&columns);
        self.compact_columns(&columns);
        self.recompute_groups();

        MoveOutcome {
            removed: members.len(),
            score,
            game_over: self.is_terminal(),
        }
    }

    /// Copy of the current grid state plus counters, for redraw
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            cells: self.grid.cells().to_vec(),
            remaining_cells: self.remaining_cells,
            available_columns: self.available_columns,
        }
    }

    /// The layout captured when the board was populated
    ///
    /// This is what the export pathway serializes: the session's starting
    /// board, not the live in-progress grid.
    pub fn initial_layout(&self) -> &GemLayout {
        &self.initial
    }

    fn no_op(&self) -> MoveOutcome {
        MoveOutcome {
            removed: 0,
            score: 0,
            game_over: self.is_terminal(),
        }
    }

    fn clear_cells(&mut self, members: &[Pos]) {
        for &(x, y) in members {
            self.grid.set(x, y, None);
        }
        self.remaining_cells -= members.len();
    }

    #[inline(always)]
    fn flat(&self, x: usize, y: usize) -> usize {
        y * self.grid.cols() + x
    }
}
