//! Scoring module - points awarded for a removal
//!
//! Removing `n` cells awards `(n - 2)^2` points for n > 2 and nothing
//! otherwise. Only groups of two or more cells are ever removable, so a
//! move scores 0 (pair) or a square number (3+).

/// Points for removing `cells_removed` cells in one move
///
/// # Examples
///
/// ```
/// use same_game_core::scoring::removal_score;
///
/// assert_eq!(removal_score(2), 0);
/// assert_eq!(removal_score(5), 9);
/// ```
pub fn removal_score(cells_removed: usize) -> u32 {
    if cells_removed > 2 {
        let n = (cells_removed - 2) as u32;
        n * n
    } else {
        0
    }
}
