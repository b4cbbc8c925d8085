// The graph that every algorithm in this crate searches or diffuses over.
//
// A `Graph` owns nodes (2D world positions) and directed connections
// (weighted adjacency). Storage is a slot vector indexed by `NodeId`:
// removing a node vacates its slot without shifting the others, so IDs stay
// stable across edits and lookups stay O(1). Outgoing connections live in a
// per-node `SmallVec` in insertion order, which is the iteration order every
// algorithm sees — stable within a run.
//
// Graphs are either free-form (editor-placed nodes, nearest-scan spatial
// lookup) or grid-backed (constructed by `grid.rs`, O(1) cell-arithmetic
// lookup). Directionality is fixed at construction; an undirected graph
// mirrors every connection add/remove so traversal is symmetric.
//
// `Clone` is the deep copy used by destructive algorithms: all storage is
// owned, so the derived clone shares nothing with the source. The Eulerian
// finder consumes connections from such a clone (see `eulerian.rs`).
//
// See also: `grid.rs` for grid construction and `GridSpec`,
// `pathfinding.rs` and `eulerian.rs` for the read-only consumers,
// `influence.rs` for the wrapper that owns a graph plus a scalar field.
//
// **Critical constraint: determinism.** Iteration is slot order for nodes
// and insertion order for connections. No hash-ordered containers.

use crate::error::GraphError;
use crate::grid::GridSpec;
use crate::types::NodeId;
use huntfield_geom::Vec2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A node in the graph — a world-space position with a stable identifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub position: Vec2,
}

/// A directed connection between two nodes, traversable `from` → `to`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    /// Traversal cost, >= 0. Defaults to the cell distance for grid graphs;
    /// free-form graphs typically rewrite costs via
    /// `set_connection_costs_to_distance`.
    pub cost: f32,
}

/// The graph container — sole authority on topology.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graph {
    /// Slot storage; `None` marks a removed node whose slot may be reused.
    nodes: Vec<Option<GraphNode>>,
    /// Outgoing connections per slot, insertion order.
    connections: Vec<SmallVec<[Connection; 8]>>,
    directed: bool,
    /// Present on grid-built graphs; enables O(1) spatial lookup.
    grid: Option<GridSpec>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            directed,
            grid: None,
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Number of storage slots, including vacated ones. Working sets sized
    /// by `NodeId` (A* scores, influence buffers) use this, not `node_count`.
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total directed connection entries. In an undirected graph every
    /// logical connection counts twice (once per direction).
    pub fn connection_count(&self) -> usize {
        self.connections.iter().map(|list| list.len()).sum()
    }

    pub fn is_valid(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.index())
            .is_some_and(|slot| slot.is_some())
    }

    /// Look up a live node by ID.
    pub fn node(&self, id: NodeId) -> Result<&GraphNode, GraphError> {
        self.nodes
            .get(id.index())
            .and_then(|slot| slot.as_ref())
            .ok_or(GraphError::InvalidNode { index: id.0 })
    }

    /// Position of a live node.
    pub fn position_of(&self, id: NodeId) -> Result<Vec2, GraphError> {
        self.node(id).map(|n| n.position)
    }

    /// Live nodes in slot order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().flatten()
    }

    /// Outgoing connections of a node, in insertion order. Unknown IDs get
    /// an empty slice (the defensive contract: lookups never panic).
    pub fn connections_from(&self, id: NodeId) -> &[Connection] {
        match self.connections.get(id.index()) {
            Some(list) if self.is_valid(id) => list.as_slice(),
            _ => &[],
        }
    }

    /// Connection count of a node. For undirected graphs this is the
    /// node's degree in the classical sense.
    pub fn degree(&self, id: NodeId) -> usize {
        self.connections_from(id).len()
    }

    pub fn has_connection(&self, from: NodeId, to: NodeId) -> bool {
        self.connections_from(from).iter().any(|c| c.to == to)
    }

    /// Add a node, reusing the lowest vacated slot if one exists.
    pub fn add_node(&mut self, position: Vec2) -> NodeId {
        if let Some(slot) = self.nodes.iter().position(Option::is_none) {
            let id = NodeId(slot as u32);
            self.nodes[slot] = Some(GraphNode { id, position });
            id
        } else {
            let id = NodeId(self.nodes.len() as u32);
            self.nodes.push(Some(GraphNode { id, position }));
            self.connections.push(SmallVec::new());
            id
        }
    }

    /// Remove a node and every connection touching it, in both directions.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.node(id)?;
        self.nodes[id.index()] = None;
        self.connections[id.index()].clear();
        for list in &mut self.connections {
            list.retain(|c| c.to != id);
        }
        Ok(())
    }

    /// Add a connection. Duplicate `(from, to)` pairs and self-loops are
    /// silent no-ops; invalid endpoints are errors. Undirected graphs also
    /// insert the mirror connection.
    pub fn add_connection(
        &mut self,
        from: NodeId,
        to: NodeId,
        cost: f32,
    ) -> Result<(), GraphError> {
        self.node(from)?;
        self.node(to)?;
        if from == to {
            return Ok(());
        }
        if !self.has_connection(from, to) {
            self.connections[from.index()].push(Connection { from, to, cost });
        }
        if !self.directed && !self.has_connection(to, from) {
            self.connections[to.index()].push(Connection {
                from: to,
                to: from,
                cost,
            });
        }
        Ok(())
    }

    /// Remove a connection. Absent pairs and unknown IDs are no-ops.
    /// Undirected graphs also remove the mirror.
    pub fn remove_connection(&mut self, from: NodeId, to: NodeId) {
        self.remove_one_way(from, to);
        if !self.directed {
            self.remove_one_way(to, from);
        }
    }

    fn remove_one_way(&mut self, from: NodeId, to: NodeId) {
        if let Some(list) = self.connections.get_mut(from.index()) {
            list.retain(|c| c.to != to);
        }
    }

    /// Overwrite every connection's cost with the Euclidean distance
    /// between its endpoints.
    pub fn set_connection_costs_to_distance(&mut self) {
        let positions: Vec<Option<Vec2>> = self
            .nodes
            .iter()
            .map(|slot| slot.as_ref().map(|n| n.position))
            .collect();
        for list in &mut self.connections {
            for c in list.iter_mut() {
                if let (Some(a), Some(b)) = (positions[c.from.index()], positions[c.to.index()]) {
                    c.cost = a.distance(b);
                }
            }
        }
    }

    /// Resolve a world-space position to a node.
    ///
    /// Grid graphs use cell arithmetic and return `None` outside the grid
    /// (or when the editor removed that cell's node). Free-form graphs scan
    /// for the nearest live node; only an empty graph yields `None`.
    pub fn node_at_position(&self, pos: Vec2) -> Option<NodeId> {
        if let Some(grid) = &self.grid {
            let id = grid.node_at(pos)?;
            self.is_valid(id).then_some(id)
        } else {
            let mut best: Option<(f32, NodeId)> = None;
            for n in self.iter_nodes() {
                let d = (n.position - pos).sqr_length();
                if best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, n.id));
                }
            }
            best.map(|(_, id)| id)
        }
    }

    /// Grid layout of a grid-built graph, if any.
    pub fn grid_spec(&self) -> Option<&GridSpec> {
        self.grid.as_ref()
    }

    pub(crate) fn set_grid_spec(&mut self, spec: GridSpec) {
        self.grid = Some(spec);
    }
}
