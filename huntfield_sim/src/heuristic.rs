// Heuristic functions for A*.
//
// Each takes the absolute offset `(|dx|, |dy|)` between a node and the goal
// and estimates the remaining cost. The caller computes the offset; these
// are pure math. Which one is admissible depends on the connection-cost
// metric: Euclidean/Octile for distance-cost grids with diagonals,
// Manhattan for 4-connected unit grids.

use std::f32::consts::SQRT_2;

/// A heuristic: estimated cost from the absolute offset `(|dx|, |dy|)`.
pub type Heuristic = fn(f32, f32) -> f32;

/// |dx| + |dy|. Admissible on 4-connected grids.
pub fn manhattan(dx: f32, dy: f32) -> f32 {
    dx + dy
}

/// Straight-line distance. Admissible whenever costs are distances.
pub fn euclidean(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Squared straight-line distance. Not admissible; greedy and fast, useful
/// for visual comparison of search behavior.
pub fn sqr_euclidean(dx: f32, dy: f32) -> f32 {
    dx * dx + dy * dy
}

/// max(|dx|, |dy|). Admissible on 8-connected grids with unit diagonals.
pub fn chebyshev(dx: f32, dy: f32) -> f32 {
    dx.max(dy)
}

/// Chebyshev weighted so diagonal steps cost sqrt(2). Admissible on
/// 8-connected grids with distance costs.
pub fn octile(dx: f32, dy: f32) -> f32 {
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    hi + (SQRT_2 - 1.0) * lo
}
