// Error taxonomy for the simulation core.
//
// Two principles from the design:
// - A missing path and a `NotEulerian` classification are *results*, not
//   errors. They come back as `Ok(None)` / an empty path so callers can
//   branch on them without unwinding.
// - Supplying a dead or out-of-range node, or a position that resolves to
//   no node, is an explicit `GraphError` — never an index panic.
//
// Idempotent edits (removing an absent connection, adding a duplicate) are
// silent no-ops and produce no error at all.

use thiserror::Error;

/// Errors raised by graph lookups and influence-field operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The supplied index does not resolve to a live node.
    #[error("node index {index} does not resolve to a live node")]
    InvalidNode { index: u32 },

    /// A world-space position resolved to no node (outside the grid, or the
    /// graph is empty).
    #[error("no node at world position ({x}, {y})")]
    NoNodeAtPosition { x: i32, y: i32 },
}

impl GraphError {
    /// Build a `NoNodeAtPosition` from float coordinates. Stored as whole
    /// units so the error stays `Eq` and cheap to match in tests.
    pub(crate) fn no_node_at(x: f32, y: f32) -> Self {
        Self::NoNodeAtPosition {
            x: x as i32,
            y: y as i32,
        }
    }
}

/// Errors raised when validating a `SimConfig`.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A numeric field is outside its documented range.
    #[error("{field} must be {expected}, got {got}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        got: f32,
    },
}
