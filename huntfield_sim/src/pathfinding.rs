// A* pathfinding over a `Graph`.
//
// Implements A* using a `BinaryHeap` (min-heap via reversed ordering) with
// node scores and came-from data stored in `Vec`s indexed by `NodeId` for
// O(1) access and deterministic behavior.
//
// Two contract points worth calling out:
// - Ties on the f-score pop the lowest `NodeId` first, so repeated searches
//   over the same graph return the same path even when several equal-cost
//   paths exist.
// - A missing path is `Ok(None)`, not an error; an invalid start or goal is
//   `Err(GraphError::InvalidNode)`. Callers branch on `None` and fall back
//   to holding position.
//
// Reopening uses the textbook cost-so-far comparison (`tentative_g <
// g_score`): with a consistent heuristic a closed node is never improved,
// so the closed check is a pure skip.
//
// See also: `graph.rs` for the `Graph` being searched, `heuristic.rs` for
// the pluggable estimate, `chase.rs` which searches toward the influence
// map's hottest region.
//
// **Critical constraint: determinism.** A* is a pure function of graph
// state, start, and goal. No randomness; f32 ordering via `total_cmp`.

use crate::error::GraphError;
use crate::graph::Graph;
use crate::heuristic::Heuristic;
use crate::types::NodeId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The result of a successful A* search.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Node IDs from start to goal, inclusive.
    pub nodes: Vec<NodeId>,
    /// Total traversal cost along the connections taken.
    pub total_cost: f32,
}

/// Entry in the A* open set (min-heap via reversed ordering).
struct OpenEntry {
    node: NodeId,
    f_score: f32,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_score.total_cmp(&other.f_score) == Ordering::Equal && self.node == other.node
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap: smallest f_score is "greatest". Equal
        // f_scores order by lowest node ID — the documented tie-break.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.node.0.cmp(&self.node.0))
    }
}

/// Find the cheapest path from `start` to `goal`.
///
/// Returns `Ok(None)` when no path exists. `start == goal` yields the
/// single-node path immediately.
pub fn find_path(
    graph: &Graph,
    heuristic: Heuristic,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<PathResult>, GraphError> {
    graph.node(start)?;
    graph.node(goal)?;

    if start == goal {
        return Ok(Some(PathResult {
            nodes: vec![start],
            total_cost: 0.0,
        }));
    }

    let n = graph.slot_count();
    // g_score[slot] = cost of the cheapest known path from start.
    let mut g_score = vec![f32::INFINITY; n];
    let mut came_from: Vec<Option<NodeId>> = vec![None; n];
    let mut closed = vec![false; n];

    g_score[start.index()] = 0.0;

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        node: start,
        f_score: heuristic_cost(graph, heuristic, start, goal),
    });

    while let Some(current) = open.pop() {
        let ci = current.node.index();

        if current.node == goal {
            return Ok(Some(reconstruct_path(&came_from, start, goal, g_score[ci])));
        }

        if closed[ci] {
            continue;
        }
        closed[ci] = true;

        let current_g = g_score[ci];

        for connection in graph.connections_from(current.node) {
            let ni = connection.to.index();

            if closed[ni] {
                continue;
            }

            let tentative_g = current_g + connection.cost;

            if tentative_g < g_score[ni] {
                g_score[ni] = tentative_g;
                came_from[ni] = Some(current.node);
                open.push(OpenEntry {
                    node: connection.to,
                    f_score: tentative_g + heuristic_cost(graph, heuristic, connection.to, goal),
                });
            }
        }
    }

    Ok(None) // Open set exhausted: no path.
}

/// Heuristic estimate between two live nodes: `h(|dx|, |dy|)` on the
/// goal-minus-node offset. Identical positions cost 0 by construction.
fn heuristic_cost(graph: &Graph, heuristic: Heuristic, from: NodeId, to: NodeId) -> f32 {
    // Both nodes were validated at entry and never removed mid-search.
    let (Ok(a), Ok(b)) = (graph.position_of(from), graph.position_of(to)) else {
        return 0.0;
    };
    let offset = b - a;
    heuristic(offset.x.abs(), offset.y.abs())
}

fn reconstruct_path(
    came_from: &[Option<NodeId>],
    start: NodeId,
    goal: NodeId,
    total_cost: f32,
) -> PathResult {
    let mut nodes = Vec::new();
    let mut current = goal;

    loop {
        nodes.push(current);
        if current == start {
            break;
        }
        match came_from[current.index()] {
            Some(prev) => current = prev,
            None => break,
        }
    }

    nodes.reverse();

    PathResult { nodes, total_cost }
}
