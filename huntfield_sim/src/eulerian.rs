// Eulerian path/circuit analysis.
//
// `classify` decides whether a walk exists that traverses every connection
// exactly once (connectivity check + odd-degree count); `find_path` then
// extracts one with Hierholzer's algorithm. Path extraction destroys
// connections as it consumes them, so it runs on a clone of the graph —
// the caller's graph is never touched.
//
// Intended for undirected graphs (the only mode the topology editor
// produces); the connectivity walk follows outgoing connections, which on
// an undirected graph covers both directions.
//
// A `NotEulerian` classification yields an empty path. That is a defined
// result, not an error — the interactive editor calls this after every
// topology change and most intermediate graphs have no Euler trail.
//
// See also: `graph.rs` for `Graph::clone` (the deep copy consumed here),
// `types.rs` for `Eulerianity`.

use crate::graph::Graph;
use crate::types::{Eulerianity, NodeId};

/// Classify a graph for Eulerian-path purposes.
///
/// A connected graph with 0 odd-degree nodes has a closed circuit; with
/// exactly 2 (and more than 2 nodes) an open trail between the odd pair;
/// anything else has neither.
pub fn classify(graph: &Graph) -> Eulerianity {
    if !is_connected(graph) {
        return Eulerianity::NotEulerian;
    }

    let odd_count = graph
        .iter_nodes()
        .filter(|n| graph.degree(n.id) % 2 == 1)
        .count();

    if odd_count > 2 {
        Eulerianity::NotEulerian
    } else if odd_count == 2 && graph.node_count() != 2 {
        Eulerianity::SemiEulerian
    } else {
        Eulerianity::Eulerian
    }
}

/// Extract an Euler trail/circuit as an ordered node sequence.
///
/// `NotEulerian` inputs yield an empty path. For `SemiEulerian` inputs the
/// walk starts at one of the two odd-degree nodes; for `Eulerian` inputs at
/// the first node with a connection.
pub fn find_path(graph: &Graph, eulerianity: Eulerianity) -> Vec<NodeId> {
    if eulerianity == Eulerianity::NotEulerian {
        return Vec::new();
    }

    if graph.node_count() > 1 && graph.connection_count() == 0 {
        return Vec::new();
    }

    // Prefer an odd-degree node with connections (mandatory start for an
    // open trail), otherwise the first live node.
    let start = graph
        .iter_nodes()
        .find(|n| {
            let d = graph.degree(n.id);
            d != 0 && d % 2 == 1
        })
        .or_else(|| graph.iter_nodes().next())
        .map(|n| n.id);
    let Some(start) = start else {
        return Vec::new();
    };

    // Hierholzer's stack walk on a disposable clone, consuming one
    // connection per move. The path accumulates in reverse.
    let mut scratch = graph.clone();
    let mut path = Vec::new();
    let mut stack: Vec<NodeId> = Vec::new();
    let mut current = start;

    loop {
        let outgoing = scratch.connections_from(current);
        if let Some(&connection) = outgoing.first() {
            stack.push(current);
            scratch.remove_connection(connection.from, connection.to);
            current = connection.to;
        } else if let Some(top) = stack.pop() {
            path.push(current);
            current = top;
        } else {
            break;
        }
    }

    path.push(start);
    path.reverse();
    path
}

/// Whether every live node is reachable from the first node that has a
/// connection. Isolated nodes make a multi-node graph unreachable and thus
/// not Eulerian.
fn is_connected(graph: &Graph) -> bool {
    if graph.node_count() > 1 && graph.connection_count() == 0 {
        return false;
    }

    let Some(root) = graph.iter_nodes().find(|n| graph.degree(n.id) > 0) else {
        return false;
    };

    let mut visited = vec![false; graph.slot_count()];
    let mut stack = vec![root.id];
    visited[root.id.index()] = true;

    while let Some(node) = stack.pop() {
        for connection in graph.connections_from(node) {
            let i = connection.to.index();
            if !visited[i] {
                visited[i] = true;
                stack.push(connection.to);
            }
        }
    }

    graph.iter_nodes().all(|n| visited[n.id.index()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use huntfield_geom::Vec2;

    fn undirected(n: usize) -> (Graph, Vec<NodeId>) {
        let mut g = Graph::new(false);
        let ids = (0..n)
            .map(|i| g.add_node(Vec2::new(i as f32, 0.0)))
            .collect();
        (g, ids)
    }

    fn connect(g: &mut Graph, pairs: &[(usize, usize)], ids: &[NodeId]) {
        for &(a, b) in pairs {
            g.add_connection(ids[a], ids[b], 1.0).unwrap();
        }
    }

    /// Every undirected connection of `graph` is used exactly once by the
    /// consecutive pairs of `path`, and each pair is actually connected.
    fn assert_valid_euler_walk(graph: &Graph, path: &[NodeId]) {
        let mut unused: Vec<(NodeId, NodeId)> = graph
            .iter_nodes()
            .flat_map(|n| graph.connections_from(n.id))
            .filter(|c| c.from < c.to)
            .map(|c| (c.from, c.to))
            .collect();

        for pair in path.windows(2) {
            let key = if pair[0] < pair[1] {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            let pos = unused
                .iter()
                .position(|&p| p == key)
                .unwrap_or_else(|| panic!("connection {key:?} reused or missing"));
            unused.swap_remove(pos);
        }

        assert!(unused.is_empty(), "unvisited connections: {unused:?}");
    }

    #[test]
    fn triangle_is_eulerian() {
        let (mut g, ids) = undirected(3);
        connect(&mut g, &[(0, 1), (1, 2), (2, 0)], &ids);
        assert_eq!(classify(&g), Eulerianity::Eulerian);

        let path = find_path(&g, Eulerianity::Eulerian);
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), path.last());
        assert_valid_euler_walk(&g, &path);
    }

    #[test]
    fn three_node_line_is_semi_eulerian() {
        let (mut g, ids) = undirected(3);
        connect(&mut g, &[(0, 1), (1, 2)], &ids);
        assert_eq!(classify(&g), Eulerianity::SemiEulerian);

        let path = find_path(&g, Eulerianity::SemiEulerian);
        assert_eq!(path.len(), 3);
        assert_valid_euler_walk(&g, &path);
        // The trail runs between the two odd-degree endpoints.
        let ends = [path[0], *path.last().unwrap()];
        assert!(ends.contains(&ids[0]) && ends.contains(&ids[2]));
    }

    #[test]
    fn star_with_three_leaves_is_not_eulerian() {
        // Center degree 3, three leaves degree 1: four odd-degree nodes.
        let (mut g, ids) = undirected(4);
        connect(&mut g, &[(0, 1), (0, 2), (0, 3)], &ids);
        assert_eq!(classify(&g), Eulerianity::NotEulerian);
        assert!(find_path(&g, Eulerianity::NotEulerian).is_empty());
    }

    #[test]
    fn two_disconnected_edges_are_not_eulerian() {
        let (mut g, ids) = undirected(4);
        connect(&mut g, &[(0, 1), (2, 3)], &ids);
        assert_eq!(classify(&g), Eulerianity::NotEulerian);
    }

    #[test]
    fn isolated_node_breaks_connectivity() {
        let (mut g, ids) = undirected(4);
        connect(&mut g, &[(0, 1), (1, 2), (2, 0)], &ids);
        // ids[3] has no connections.
        assert_eq!(classify(&g), Eulerianity::NotEulerian);
    }

    #[test]
    fn connectionless_multi_node_graph_is_not_eulerian() {
        let (g, _) = undirected(3);
        assert_eq!(classify(&g), Eulerianity::NotEulerian);
    }

    #[test]
    fn square_circuit_returns_to_start() {
        let (mut g, ids) = undirected(4);
        connect(&mut g, &[(0, 1), (1, 2), (2, 3), (3, 0)], &ids);
        assert_eq!(classify(&g), Eulerianity::Eulerian);

        let path = find_path(&g, Eulerianity::Eulerian);
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());
        assert_valid_euler_walk(&g, &path);
    }

    #[test]
    fn bowtie_with_bridge_walks_every_connection() {
        // Two triangles joined at a shared node: all degrees even.
        let (mut g, ids) = undirected(5);
        connect(
            &mut g,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)],
            &ids,
        );
        assert_eq!(classify(&g), Eulerianity::Eulerian);

        let path = find_path(&g, Eulerianity::Eulerian);
        assert_eq!(path.len(), 7);
        assert_valid_euler_walk(&g, &path);
    }

    #[test]
    fn find_path_leaves_source_graph_intact() {
        let (mut g, ids) = undirected(3);
        connect(&mut g, &[(0, 1), (1, 2), (2, 0)], &ids);
        let before = g.connection_count();
        let _ = find_path(&g, classify(&g));
        assert_eq!(g.connection_count(), before);
    }
}
