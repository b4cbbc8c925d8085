// Uniform-grid graph construction and cell arithmetic.
//
// A grid graph is an ordinary `Graph` whose nodes sit at cell centers, laid
// out row-major so that slot index = `row * columns + col`. That layout is
// what makes the O(1) spatial lookup in `GridSpec::node_at` valid — grid
// graphs must only ever be built through `build_grid`, never assembled by
// hand.
//
// Connection costs are distances: `cell_size` for cardinal neighbors and
// `cell_size * sqrt(2)` for diagonal ones, so A* with the Euclidean or
// Octile heuristic stays admissible.
//
// See also: `graph.rs` for the container, `config.rs` for `GridConfig`.

use crate::config::GridConfig;
use crate::graph::Graph;
use crate::types::NodeId;
use huntfield_geom::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::SQRT_2;

/// Layout of a grid-built graph: enough to convert between world positions
/// and node slots with pure arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f32,
}

impl GridSpec {
    /// World-space center of a cell.
    pub fn cell_center(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.cell_size,
            (row as f32 + 0.5) * self.cell_size,
        )
    }

    /// The node occupying a cell.
    pub fn node_in_cell(&self, col: u32, row: u32) -> NodeId {
        NodeId(row * self.columns + col)
    }

    /// Resolve a world position to the node of the containing cell.
    /// Positions outside the grid rectangle yield `None`.
    pub fn node_at(&self, pos: Vec2) -> Option<NodeId> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let col = (pos.x / self.cell_size) as u32;
        let row = (pos.y / self.cell_size) as u32;
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.node_in_cell(col, row))
    }
}

/// Build a uniform grid graph from the config: `columns * rows` nodes at
/// cell centers, each connected to its 4 cardinal neighbors and, when
/// `connect_diagonally` is set, its 4 diagonal neighbors.
pub fn build_grid(config: &GridConfig) -> Graph {
    let spec = GridSpec {
        columns: config.columns,
        rows: config.rows,
        cell_size: config.cell_size,
    };
    let mut graph = Graph::new(config.directed);

    for row in 0..config.rows {
        for col in 0..config.columns {
            graph.add_node(spec.cell_center(col, row));
        }
    }

    let cardinal: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let diagonal: [(i64, i64); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

    for row in 0..config.rows {
        for col in 0..config.columns {
            let from = spec.node_in_cell(col, row);
            for &(dx, dy) in &cardinal {
                if let Some(to) = neighbor(&spec, col, row, dx, dy) {
                    // Endpoints exist by construction; duplicate adds
                    // (the mirror of an earlier cell's add) are no-ops.
                    let _ = graph.add_connection(from, to, config.cell_size);
                }
            }
            if config.connect_diagonally {
                for &(dx, dy) in &diagonal {
                    if let Some(to) = neighbor(&spec, col, row, dx, dy) {
                        let _ = graph.add_connection(from, to, config.cell_size * SQRT_2);
                    }
                }
            }
        }
    }

    graph.set_grid_spec(spec);
    graph
}

fn neighbor(spec: &GridSpec, col: u32, row: u32, dx: i64, dy: i64) -> Option<NodeId> {
    let c = col as i64 + dx;
    let r = row as i64 + dy;
    if c < 0 || r < 0 || c >= spec.columns as i64 || r >= spec.rows as i64 {
        return None;
    }
    Some(spec.node_in_cell(c as u32, r as u32))
}
