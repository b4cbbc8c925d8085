// huntfield_sim — pure Rust AI-pursuit simulation library.
//
// This crate contains the full simulation core for Huntfield: the 2D graph
// world, pathfinding, Eulerian-path analysis, and the influence-map engine
// that predicts where a lost target went. It has zero rendering or input
// dependencies and can be tested, benchmarked, and run headless; front-ends
// consume it through plain method calls.
//
// Module overview:
// - `types.rs`:       NodeId, Eulerianity, BlockTag — shared identifiers and enums.
// - `error.rs`:       GraphError / ConfigError taxonomy.
// - `config.rs`:      SimConfig (grid, propagation, barrier tuning) with JSON load.
// - `graph.rs`:       Graph/GraphNode/Connection — slot-stable topology storage.
// - `grid.rs`:        Uniform-grid construction + O(1) position lookup.
// - `heuristic.rs`:   Manhattan/Euclidean/Chebyshev/Octile estimates for A*.
// - `pathfinding.rs`: A* search over the graph.
// - `eulerian.rs`:    Eulerian classification + Hierholzer path extraction.
// - `influence.rs`:   InfluenceMap — double-buffered diffusion, two policies,
//                     blocked nodes with provenance, consumer queries.
// - `chase.rs`:       ChaseController — pursuit start/stop, barrier growth,
//                     wind-down.
// - `geom`:           Re-exported from `huntfield_geom` — Vec2 and Color math.
//
// **Critical constraint: determinism.** Every algorithm is a pure function
// of graph state, field state, and config. Iteration orders are slot order
// or insertion order, never hash order; ties break by lowest NodeId. Two
// runs over the same inputs produce identical paths, fields, and barriers.

pub mod chase;
pub mod config;
pub mod error;
pub mod eulerian;
pub use huntfield_geom as geom;
pub mod graph;
pub mod grid;
pub mod heuristic;
pub mod influence;
pub mod pathfinding;
pub mod types;
