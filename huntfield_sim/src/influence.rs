// Influence-map diffusion over a graph.
//
// `InfluenceMap` owns a `Graph` plus a per-node scalar field and steps the
// field forward on a fixed simulated-time interval. Two policies exist:
//
// - `Momentum`: each node blends toward its strongest neighbor's influence
//   attenuated exponentially by connection cost. General influence fields.
// - `Heat`: a wavefront of maximum heat spreads outward from wherever the
//   field was seeded, cooling by one unit per step behind the front. Used
//   by the pursuit logic to model where a lost target could have gone.
//   The map tracks wavefront growth and latches a caller-visible
//   `should_end` flag once the search is saturated, capped, or exhausted.
//
// Every step is double-buffered: all next-values are computed from a frozen
// snapshot of the field, then committed at once, so no node's new value
// feeds a neighbor's computation within the same tick.
//
// Blocked nodes act as walls for the duration of a step: they contribute no
// influence to neighbors and see none from them, while their connections
// formally remain in the graph. Each block carries a `BlockTag` recording
// who added it, so the pursuit can clear its own barrier without disturbing
// terrain blocks (see `chase.rs`).
//
// The map owns its graph: topology mutations go through the forwarding
// methods below, which resize the field buffers whenever the node count
// changes. Interactive editors therefore edit topology through the map,
// never through a bare `Graph`.
//
// See also: `config.rs` for `PropagationConfig`, `chase.rs` for the
// pursuit controller built on the heat policy, `graph.rs` for the graph.
//
// **Critical constraint: determinism.** Iteration is slot order; the
// blocked set is a `BTreeMap`; no hash-ordered state anywhere.

use crate::config::{PropagationConfig, PropagationPolicy};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::types::{BlockTag, NodeId};
use huntfield_geom::{Color, Vec2};
use std::collections::BTreeMap;
use tracing::debug;

const NEGATIVE_COLOR: Color = Color::new(1.0, 0.2, 0.0);
const NEUTRAL_COLOR: Color = Color::new(0.3, 0.3, 0.3);
const POSITIVE_COLOR: Color = Color::new(0.0, 0.2, 1.0);
const TERRAIN_BLOCK_COLOR: Color = Color::new(1.0, 1.0, 1.0);
const BARRIER_BLOCK_COLOR: Color = Color::new(1.0, 0.8, 0.0);

/// A graph plus a diffusing scalar field over its nodes.
#[derive(Clone, Debug)]
pub struct InfluenceMap {
    graph: Graph,
    config: PropagationConfig,
    /// Current committed field, indexed by node slot.
    influence: Vec<f32>,
    /// Next-value buffer; swapped in at commit.
    buffer: Vec<f32>,
    /// Blocked nodes with provenance. Ordered for deterministic iteration.
    blocked: BTreeMap<NodeId, BlockTag>,
    time_since_propagation: f32,
    /// Consecutive heat-policy steps since the last reset.
    propagation_steps: u32,
    /// Latched once the heat policy decides the search should wind down.
    should_end: bool,
}

impl InfluenceMap {
    pub fn new(graph: Graph, config: PropagationConfig) -> Self {
        let slots = graph.slot_count();
        Self {
            graph,
            config,
            influence: vec![0.0; slots],
            buffer: vec![0.0; slots],
            blocked: BTreeMap::new(),
            time_since_propagation: 0.0,
            propagation_steps: 0,
            should_end: false,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &PropagationConfig {
        &self.config
    }

    // -----------------------------------------------------------------
    // Topology mutation — forwarded so the field buffers stay sized.
    // -----------------------------------------------------------------

    pub fn add_node(&mut self, position: Vec2) -> NodeId {
        let id = self.graph.add_node(position);
        self.on_graph_modified(true, false);
        id
    }

    pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.graph.remove_node(id)?;
        self.blocked.remove(&id);
        // The vacated slot must not leak stale influence into a reused ID.
        self.influence[id.index()] = 0.0;
        self.on_graph_modified(true, true);
        Ok(())
    }

    pub fn add_connection(
        &mut self,
        from: NodeId,
        to: NodeId,
        cost: f32,
    ) -> Result<(), GraphError> {
        self.graph.add_connection(from, to, cost)?;
        self.on_graph_modified(false, true);
        Ok(())
    }

    pub fn remove_connection(&mut self, from: NodeId, to: NodeId) {
        self.graph.remove_connection(from, to);
        self.on_graph_modified(false, true);
    }

    pub fn set_connection_costs_to_distance(&mut self) {
        self.graph.set_connection_costs_to_distance();
    }

    fn on_graph_modified(&mut self, nodes_changed: bool, _connections_changed: bool) {
        if nodes_changed {
            let slots = self.graph.slot_count();
            self.influence.resize(slots, 0.0);
            self.buffer.resize(slots, 0.0);
        }
    }

    // -----------------------------------------------------------------
    // Field access
    // -----------------------------------------------------------------

    pub fn influence(&self, id: NodeId) -> Result<f32, GraphError> {
        self.graph.node(id)?;
        Ok(self.influence[id.index()])
    }

    pub fn set_influence(&mut self, id: NodeId, value: f32) -> Result<(), GraphError> {
        self.graph.node(id)?;
        self.influence[id.index()] = value;
        Ok(())
    }

    /// Seed the field at a world position (e.g. the cell a target was last
    /// seen in). Fails when the position resolves to no node.
    pub fn set_influence_at_position(&mut self, pos: Vec2, value: f32) -> Result<(), GraphError> {
        let id = self
            .graph
            .node_at_position(pos)
            .ok_or_else(|| GraphError::no_node_at(pos.x, pos.y))?;
        self.set_influence(id, value)
    }

    /// Zero the whole field and reset the termination state.
    pub fn reset_influence(&mut self) {
        self.influence.fill(0.0);
        self.buffer.fill(0.0);
        self.propagation_steps = 0;
        self.should_end = false;
    }

    /// Whether the heat policy has signalled that the search should wind
    /// down. Latched; cleared by `reset_influence` / `set_should_end`.
    pub fn should_end(&self) -> bool {
        self.should_end
    }

    pub fn set_should_end(&mut self, value: bool) {
        self.should_end = value;
    }

    // -----------------------------------------------------------------
    // Blocking
    // -----------------------------------------------------------------

    /// Block a node. If it is already blocked the existing provenance wins,
    /// so a barrier pass can never capture (and later clear) a terrain
    /// block.
    pub fn block(&mut self, id: NodeId, tag: BlockTag) -> Result<(), GraphError> {
        self.graph.node(id)?;
        self.blocked.entry(id).or_insert(tag);
        Ok(())
    }

    /// Unblock a node regardless of who blocked it.
    pub fn unblock(&mut self, id: NodeId) {
        self.blocked.remove(&id);
    }

    /// Remove every block added by the given source, leaving others.
    pub fn unblock_where(&mut self, tag: BlockTag) {
        self.blocked.retain(|_, t| *t != tag);
    }

    pub fn is_blocked(&self, id: NodeId) -> bool {
        self.blocked.contains_key(&id)
    }

    pub fn blocked_nodes(&self) -> impl Iterator<Item = (NodeId, BlockTag)> + '_ {
        self.blocked.iter().map(|(id, tag)| (*id, *tag))
    }

    /// Block every live node that has no connections, tagging it as
    /// terrain. The editor calls this after topology changes so walled-off
    /// cells never receive influence.
    pub fn block_isolated_nodes(&mut self) {
        let isolated: Vec<NodeId> = self
            .graph
            .iter_nodes()
            .filter(|n| self.graph.degree(n.id) == 0)
            .map(|n| n.id)
            .collect();
        for id in isolated {
            self.blocked.entry(id).or_insert(BlockTag::Terrain);
        }
    }

    // -----------------------------------------------------------------
    // Propagation
    // -----------------------------------------------------------------

    /// Accumulate `dt` and run at most one propagation step once the
    /// configured interval has elapsed. The remainder carries over.
    pub fn propagate(&mut self, dt: f32) {
        self.time_since_propagation += dt;
        if self.time_since_propagation < self.config.interval {
            return;
        }
        self.time_since_propagation -= self.config.interval;

        match self.config.policy {
            PropagationPolicy::Momentum => self.step_momentum(),
            PropagationPolicy::Heat => self.step_heat(),
        }
    }

    /// One momentum/decay step: blend each node toward its
    /// strongest-magnitude visible neighbor, attenuated by connection cost.
    fn step_momentum(&mut self) {
        let momentum = self.config.momentum;
        let decay = self.config.decay;
        let max_abs = self.config.max_abs_influence;

        self.buffer.fill(0.0);
        for node in self.graph.iter_nodes() {
            let i = node.id.index();
            let current = self.influence[i];

            // Strongest visible neighbor. Blocked nodes see nothing and
            // contribute nothing; an empty neighborhood contributes 0.
            let mut candidate = 0.0f32;
            let mut best_abs = 0.0f32;
            if !self.is_blocked(node.id) {
                for connection in self.graph.connections_from(node.id) {
                    if self.is_blocked(connection.to) {
                        continue;
                    }
                    let neighbor = self.influence[connection.to.index()];
                    if neighbor.abs() > best_abs {
                        best_abs = neighbor.abs();
                        candidate = neighbor * (-connection.cost * decay).exp();
                    }
                }
            }

            let next = momentum * current + (1.0 - momentum) * candidate;
            self.buffer[i] = next.clamp(-max_abs, max_abs);
        }
        std::mem::swap(&mut self.influence, &mut self.buffer);
    }

    /// One heat-spreading step: cold nodes adjacent to the wavefront ignite
    /// to `max_heat`, previously heated nodes cool by one unit. Updates the
    /// termination latch afterwards.
    fn step_heat(&mut self) {
        let max_heat = self.config.max_heat;

        if self.should_end {
            self.propagation_steps = 0;
        } else {
            self.propagation_steps += 1;
        }

        let mut cells_heated: u32 = 0;

        self.buffer.fill(0.0);
        for node in self.graph.iter_nodes() {
            let i = node.id.index();
            let current = self.influence[i];
            let is_cold = current <= 0.0;

            let mut neighbor_heated = false;
            if !self.is_blocked(node.id) {
                for connection in self.graph.connections_from(node.id) {
                    if self.is_blocked(connection.to) {
                        continue;
                    }
                    if self.influence[connection.to.index()] >= max_heat {
                        neighbor_heated = true;
                        break;
                    }
                }
            }

            let desired = if is_cold && neighbor_heated && !self.should_end {
                cells_heated += 1;
                max_heat
            } else if !is_cold {
                (current - 1.0).clamp(0.0, max_heat)
            } else {
                0.0
            };
            self.buffer[i] = desired;
        }
        std::mem::swap(&mut self.influence, &mut self.buffer);

        let front_saturated = cells_heated >= self.config.max_heated_cells;
        let steps_exhausted = self.propagation_steps >= self.config.max_propagation_steps;
        let front_dead = cells_heated == 0;

        if (front_saturated || steps_exhausted || front_dead) && !self.should_end {
            debug!(
                cells_heated,
                steps = self.propagation_steps,
                front_saturated,
                steps_exhausted,
                "heat propagation signalled wind-down"
            );
            self.should_end = true;
        }
    }

    // -----------------------------------------------------------------
    // Consumer queries
    // -----------------------------------------------------------------

    /// Display color for a node: blocked nodes show their marker color,
    /// others lerp from neutral toward the positive/negative extreme by
    /// relative magnitude.
    pub fn node_color(&self, id: NodeId) -> Result<Color, GraphError> {
        self.graph.node(id)?;
        if let Some(tag) = self.blocked.get(&id) {
            return Ok(match tag {
                BlockTag::Terrain => TERRAIN_BLOCK_COLOR,
                BlockTag::Barrier => BARRIER_BLOCK_COLOR,
            });
        }

        let scale = match self.config.policy {
            PropagationPolicy::Heat => self.config.max_heat,
            PropagationPolicy::Momentum => self.config.max_abs_influence,
        };
        let value = self.influence[id.index()];
        let relative = (value.abs() / scale).clamp(0.0, 1.0);
        let extreme = if value < 0.0 {
            NEGATIVE_COLOR
        } else {
            POSITIVE_COLOR
        };
        Ok(NEUTRAL_COLOR.lerp(extreme, relative))
    }

    /// The node holding the highest positive influence, lowest ID on ties.
    pub fn hottest_node(&self) -> Option<NodeId> {
        let mut best: Option<(f32, NodeId)> = None;
        for node in self.graph.iter_nodes() {
            let value = self.influence[node.id.index()];
            if value > 0.0 && best.is_none_or(|(bv, _)| value > bv) {
                best = Some((value, node.id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Influence-weighted mean position of all nodes with positive
    /// influence — the pursuit's best single guess of where the target is.
    pub fn heat_centroid(&self) -> Option<Vec2> {
        let mut weighted = Vec2::ZERO;
        let mut total = 0.0f32;
        for node in self.graph.iter_nodes() {
            let value = self.influence[node.id.index()];
            if value > 0.0 {
                weighted = weighted + node.position * value;
                total += value;
            }
        }
        if total > 0.0 {
            Some(weighted * (1.0 / total))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::grid::build_grid;

    fn heat_config() -> PropagationConfig {
        PropagationConfig {
            policy: PropagationPolicy::Heat,
            ..PropagationConfig::default()
        }
    }

    fn momentum_config() -> PropagationConfig {
        PropagationConfig {
            policy: PropagationPolicy::Momentum,
            ..PropagationConfig::default()
        }
    }

    /// 5x5 4-connected unit grid, undirected.
    fn unit_grid() -> Graph {
        build_grid(&GridConfig {
            columns: 5,
            rows: 5,
            cell_size: 1.0,
            connect_diagonally: false,
            directed: false,
        })
    }

    fn step(map: &mut InfluenceMap) {
        map.propagate(map.config().interval);
    }

    #[test]
    fn heat_wavefront_ignites_neighbors_and_cools_source() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        let spec = *map.graph().grid_spec().unwrap();
        let center = spec.node_in_cell(2, 2);
        map.set_influence_at_position(Vec2::new(2.5, 2.5), 9.0)
            .unwrap();

        step(&mut map);

        // All four cardinal neighbors reach max heat; the center cools.
        for (dx, dy) in [(1i64, 0i64), (-1, 0), (0, 1), (0, -1)] {
            let id = spec.node_in_cell((2 + dx) as u32, (2 + dy) as u32);
            assert_eq!(map.influence(id).unwrap(), 9.0);
        }
        assert_eq!(map.influence(center).unwrap(), 8.0);
        // Diagonal cells are untouched on a 4-connected grid.
        assert_eq!(map.influence(spec.node_in_cell(1, 1)).unwrap(), 0.0);
    }

    #[test]
    fn heat_signals_end_within_step_cap() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        map.set_influence_at_position(Vec2::new(2.5, 2.5), 9.0)
            .unwrap();

        let cap = map.config().max_propagation_steps;
        for _ in 0..cap {
            if map.should_end() {
                break;
            }
            step(&mut map);
        }
        assert!(map.should_end());
    }

    #[test]
    fn heat_signals_end_when_nothing_ignites() {
        // A single isolated node: its heat can never spread.
        let mut graph = Graph::new(false);
        let only = graph.add_node(Vec2::ZERO);
        let mut map = InfluenceMap::new(graph, heat_config());
        map.set_influence(only, 9.0).unwrap();

        step(&mut map);
        assert!(map.should_end());
        // And the node keeps cooling regardless.
        assert_eq!(map.influence(only).unwrap(), 8.0);
    }

    #[test]
    fn heat_values_stay_in_bounds() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        map.set_influence_at_position(Vec2::new(2.5, 2.5), 9.0)
            .unwrap();
        for _ in 0..40 {
            step(&mut map);
            for node in map.graph().iter_nodes().map(|n| n.id).collect::<Vec<_>>() {
                let v = map.influence(node).unwrap();
                assert!((0.0..=9.0).contains(&v), "influence {v} out of bounds");
            }
        }
    }

    #[test]
    fn heat_stops_igniting_while_winding_down() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        map.set_influence_at_position(Vec2::new(2.5, 2.5), 9.0)
            .unwrap();
        map.set_should_end(true);

        step(&mut map);
        // Nothing new ignites once the wind-down flag is set.
        let spec = *map.graph().grid_spec().unwrap();
        assert_eq!(map.influence(spec.node_in_cell(1, 2)).unwrap(), 0.0);
        assert_eq!(map.influence(spec.node_in_cell(2, 2)).unwrap(), 8.0);
    }

    #[test]
    fn blocked_node_neither_receives_nor_sends() {
        // Line a - b - c with b blocked: heat at a must not cross.
        let mut graph = Graph::new(false);
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(1.0, 0.0));
        let c = graph.add_node(Vec2::new(2.0, 0.0));
        graph.add_connection(a, b, 1.0).unwrap();
        graph.add_connection(b, c, 1.0).unwrap();

        let mut map = InfluenceMap::new(graph, heat_config());
        map.block(b, BlockTag::Terrain).unwrap();
        map.set_influence(a, 9.0).unwrap();

        step(&mut map);
        assert_eq!(map.influence(b).unwrap(), 0.0);
        assert_eq!(map.influence(c).unwrap(), 0.0);
        // The connections themselves still exist.
        assert!(map.graph().has_connection(a, b));
        assert!(map.graph().has_connection(b, c));
    }

    #[test]
    fn momentum_blend_matches_formula() {
        let mut graph = Graph::new(false);
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(1.0, 0.0));
        graph.add_connection(a, b, 1.0).unwrap();

        let mut map = InfluenceMap::new(graph, momentum_config());
        map.set_influence(a, 100.0).unwrap();

        step(&mut map);
        // b blends toward a's value attenuated by exp(-cost * decay).
        let expected_b = 0.2 * (100.0 * (-0.1f32).exp());
        assert!((map.influence(b).unwrap() - expected_b).abs() < 1e-3);
        // a keeps momentum of its own value; its only neighbor was 0.
        assert!((map.influence(a).unwrap() - 80.0).abs() < 1e-3);
    }

    #[test]
    fn momentum_values_stay_clamped() {
        let mut graph = Graph::new(false);
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(1.0, 0.0));
        graph.add_connection(a, b, 0.0).unwrap();

        let mut config = momentum_config();
        config.max_abs_influence = 10.0;
        let mut map = InfluenceMap::new(graph, config);
        map.set_influence(a, 1000.0).unwrap();
        map.set_influence(b, -1000.0).unwrap();

        step(&mut map);
        for id in [a, b] {
            assert!(map.influence(id).unwrap().abs() <= 10.0);
        }
    }

    #[test]
    fn momentum_negative_influence_spreads() {
        let mut graph = Graph::new(false);
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(1.0, 0.0));
        graph.add_connection(a, b, 1.0).unwrap();

        let mut map = InfluenceMap::new(graph, momentum_config());
        map.set_influence(a, -50.0).unwrap();

        step(&mut map);
        assert!(map.influence(b).unwrap() < 0.0);
    }

    #[test]
    fn block_provenance_first_tag_wins() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        let id = NodeId(0);
        map.block(id, BlockTag::Terrain).unwrap();
        map.block(id, BlockTag::Barrier).unwrap();

        // Clearing barrier blocks must not release the terrain block.
        map.unblock_where(BlockTag::Barrier);
        assert!(map.is_blocked(id));
        map.unblock_where(BlockTag::Terrain);
        assert!(!map.is_blocked(id));
    }

    #[test]
    fn block_invalid_node_errors() {
        let mut map = InfluenceMap::new(Graph::new(false), heat_config());
        assert_eq!(
            map.block(NodeId(5), BlockTag::Terrain),
            Err(GraphError::InvalidNode { index: 5 })
        );
    }

    #[test]
    fn block_isolated_nodes_tags_terrain() {
        let mut graph = Graph::new(false);
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(1.0, 0.0));
        let lone = graph.add_node(Vec2::new(9.0, 9.0));
        graph.add_connection(a, b, 1.0).unwrap();

        let mut map = InfluenceMap::new(graph, heat_config());
        map.block_isolated_nodes();
        assert!(map.is_blocked(lone));
        assert!(!map.is_blocked(a));
        assert_eq!(
            map.blocked_nodes().collect::<Vec<_>>(),
            vec![(lone, BlockTag::Terrain)]
        );
    }

    #[test]
    fn set_influence_at_unresolvable_position_errors() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        let err = map.set_influence_at_position(Vec2::new(-3.0, 0.0), 9.0);
        assert!(err.is_err());
    }

    #[test]
    fn topology_edits_resize_the_field() {
        let mut map = InfluenceMap::new(Graph::new(false), heat_config());
        let a = map.add_node(Vec2::new(0.0, 0.0));
        let b = map.add_node(Vec2::new(1.0, 0.0));
        map.add_connection(a, b, 1.0).unwrap();
        map.set_influence(b, 5.0).unwrap();
        assert_eq!(map.influence(b).unwrap(), 5.0);

        // Removing a node zeroes its slot so a reused ID starts cold.
        map.remove_node(b).unwrap();
        let reused = map.add_node(Vec2::new(2.0, 0.0));
        assert_eq!(reused, b);
        assert_eq!(map.influence(reused).unwrap(), 0.0);
    }

    #[test]
    fn propagation_interval_accumulates_with_remainder() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        map.set_influence_at_position(Vec2::new(2.5, 2.5), 9.0)
            .unwrap();

        // Two quarter-intervals: no step yet.
        map.propagate(0.02);
        map.propagate(0.02);
        let spec = *map.graph().grid_spec().unwrap();
        assert_eq!(map.influence(spec.node_in_cell(1, 2)).unwrap(), 0.0);

        // Crossing the interval fires exactly one step.
        map.propagate(0.02);
        assert_eq!(map.influence(spec.node_in_cell(1, 2)).unwrap(), 9.0);
    }

    #[test]
    fn node_colors_reflect_field_and_blocks() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        let hot = NodeId(0);
        let cold = NodeId(1);
        let wall = NodeId(2);
        map.set_influence(hot, 9.0).unwrap();
        map.block(wall, BlockTag::Barrier).unwrap();

        let approx = |a: Color, b: Color| {
            (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
        };
        assert!(approx(map.node_color(hot).unwrap(), POSITIVE_COLOR));
        assert!(approx(map.node_color(cold).unwrap(), NEUTRAL_COLOR));
        assert_eq!(map.node_color(wall).unwrap(), BARRIER_BLOCK_COLOR);
    }

    #[test]
    fn hottest_node_and_centroid() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        assert_eq!(map.hottest_node(), None);
        assert_eq!(map.heat_centroid(), None);

        let spec = *map.graph().grid_spec().unwrap();
        let left = spec.node_in_cell(1, 2);
        let right = spec.node_in_cell(3, 2);
        map.set_influence(left, 9.0).unwrap();
        map.set_influence(right, 3.0).unwrap();

        assert_eq!(map.hottest_node(), Some(left));
        let centroid = map.heat_centroid().unwrap();
        // Weighted 3:1 toward the left node.
        assert!((centroid.x - (1.5 * 9.0 + 3.5 * 3.0) / 12.0).abs() < 1e-5);
        assert!((centroid.y - 2.5).abs() < 1e-5);
    }

    #[test]
    fn reset_clears_field_and_latch() {
        let mut map = InfluenceMap::new(unit_grid(), heat_config());
        map.set_influence(NodeId(0), 9.0).unwrap();
        map.set_should_end(true);
        map.reset_influence();
        assert_eq!(map.influence(NodeId(0)).unwrap(), 0.0);
        assert!(!map.should_end());
    }
}
