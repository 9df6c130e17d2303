//! SameGame engine (workspace facade crate).
//!
//! This package keeps a single `same_game::{core,pattern,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use same_game_core as core;
pub use same_game_pattern as pattern;
pub use same_game_types as types;
