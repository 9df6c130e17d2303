//! Core grid logic - pure, deterministic, and testable
//!
//! This crate contains the whole game-rule surface of the engine. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical board
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: flat-array gem grid with bounds-absorbing cell access
//! - [`engine`]: group detection, removal, gravity, compaction, terminal
//!   detection, and the single-move entry point
//! - [`rng`]: seeded LCG for reproducible random boards
//! - [`scoring`]: the removal scoring formula
//! - [`snapshot`]: point-in-time grid readouts for collaborators
//!
//! # Game Rules
//!
//! - A *group* is a maximal set of same-colored cells connected
//!   up/down/left/right (no diagonals).
//! - Only groups of two or more cells can be removed; clicking a lone gem
//!   does nothing.
//! - After a removal, gems fall to the bottom of their columns and columns
//!   that emptied collapse leftward.
//! - Removing `n` cells scores `(n - 2)^2` points for n > 2.
//! - The game ends when no removable group remains.
//!
//! # Example
//!
//! ```
//! use same_game_core::GridEngine;
//!
//! let mut engine = GridEngine::random_default(12345);
//!
//! // Click every cell once; terminal boards ignore further clicks.
//! let mut score = 0;
//! for y in 0..engine.rows() {
//!     for x in 0..engine.cols() {
//!         score += engine.play(x, y).score;
//!     }
//! }
//!
//! assert_eq!(engine.remaining_cells(), engine.snapshot().remaining_cells);
//! ```

pub mod engine;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use same_game_types as types;

// Re-export commonly used types for convenience
pub use engine::{EngineError, GridEngine, MoveOutcome, Pos};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use scoring::removal_score;
pub use snapshot::GridSnapshot;
