// Core identifiers and shared enums.
//
// Defines the compact node identifier used throughout the graph and
// influence subsystems, the Eulerian classification result, and the
// provenance tag attached to blocked nodes.
//
// See also: `graph.rs` for the storage these IDs index into, `eulerian.rs`
// for where `Eulerianity` is produced, `influence.rs` for the blocked set
// keyed by `NodeId` and tagged with `BlockTag`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact identifier for a graph node.
///
/// The value is the node's slot in the graph's storage, so lookups are O(1)
/// vector indexing. Slots of removed nodes may be reused by later
/// `add_node` calls; an ID is only meaningful against the graph that issued
/// it while that node is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The storage slot this ID indexes.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Classification of a graph for Eulerian-path purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eulerianity {
    /// No walk can traverse every connection exactly once.
    NotEulerian,
    /// An open trail exists; it must start and end at the two odd-degree nodes.
    SemiEulerian,
    /// A closed circuit exists that returns to its starting node.
    Eulerian,
}

/// Who added a node to the influence map's blocked set.
///
/// Blocks from different sources share one set but are removed
/// independently: ending a pursuit clears only `Barrier` blocks, leaving
/// impassable terrain in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockTag {
    /// Impassable terrain or an editor-made obstacle. Persists until the
    /// scenario removes it explicitly.
    Terrain,
    /// Added by the pursuit barrier while chasing a lost target. Cleared
    /// when the pursuit ends.
    Barrier,
}
