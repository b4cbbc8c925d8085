// Pursuit orchestration over the heat-policy influence map.
//
// When an agent loses sight of its target, `ChaseController::start` records
// the last known position and velocity, seeds the influence map with
// maximum heat at that cell, and walls off the cells *behind* the target —
// any neighbor whose direction from the last known position deviates from
// the travel direction by at least the configured angle. The wavefront then
// only spreads where the target could plausibly have gone.
//
// While the pursuit runs, the barrier grows on its own interval
// (independent of the heat interval): an unblocked node adjacent to an
// existing barrier node that is itself behind the target joins the barrier
// on the next barrier tick. Additions are buffered within a tick so one
// update's growth cannot cascade.
//
// Ending is two-phase. The map latches `should_end` when the wavefront
// saturates, hits the step cap, or dies out; the controller then lets the
// residual heat cool and, once every node reads zero, winds the pursuit
// down: influence cleared, counters reset, and *only* the barrier's own
// blocks removed. Terrain blocks added by the editor or
// `block_isolated_nodes` are untouched — the blocked set records
// provenance per entry precisely so this cleanup cannot overreach.
//
// See also: `influence.rs` for the heat policy and block provenance,
// `config.rs` for `BarrierConfig`.

use crate::config::BarrierConfig;
use crate::error::GraphError;
use crate::influence::InfluenceMap;
use crate::types::{BlockTag, NodeId};
use huntfield_geom::Vec2;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Drives one pursuit at a time over an `InfluenceMap` running the heat
/// policy.
#[derive(Clone, Debug)]
pub struct ChaseController {
    started: bool,
    stopping: bool,
    last_known_pos: Vec2,
    last_known_velocity: Vec2,
    /// Nodes this pursuit blocked, in the order they were added. The
    /// ordered record is what barrier growth scans against; membership
    /// tests go through a hash set built per tick.
    barrier: Vec<NodeId>,
    time_since_barrier_update: f32,
    max_angle: f32,
    update_interval: f32,
}

impl ChaseController {
    pub fn new(config: &BarrierConfig) -> Self {
        Self {
            started: false,
            stopping: false,
            last_known_pos: Vec2::ZERO,
            last_known_velocity: Vec2::ZERO,
            barrier: Vec::new(),
            time_since_barrier_update: 0.0,
            max_angle: config.max_angle,
            update_interval: config.update_interval,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether the map has signalled wind-down and the pursuit is waiting
    /// for residual heat to cool.
    pub fn stopping(&self) -> bool {
        self.stopping
    }

    pub fn last_known_position(&self) -> Vec2 {
        self.last_known_pos
    }

    pub fn last_known_velocity(&self) -> Vec2 {
        self.last_known_velocity
    }

    /// Begin a pursuit from the target's last known position and velocity:
    /// seed the heat source and wall off the neighbors behind it.
    pub fn start(
        &mut self,
        map: &mut InfluenceMap,
        pos: Vec2,
        velocity: Vec2,
    ) -> Result<(), GraphError> {
        let source = map
            .graph()
            .node_at_position(pos)
            .ok_or_else(|| GraphError::no_node_at(pos.x, pos.y))?;

        self.started = true;
        self.stopping = false;
        self.last_known_pos = pos;
        self.last_known_velocity = velocity;

        let behind: Vec<NodeId> = map
            .graph()
            .connections_from(source)
            .iter()
            .map(|c| c.to)
            .filter(|&to| to != source)
            .filter(|&to| self.is_behind(map, to))
            .collect();

        for id in behind {
            if !map.is_blocked(id) {
                map.block(id, BlockTag::Barrier)?;
                self.barrier.push(id);
            }
        }

        map.set_influence_at_position(pos, map.config().max_heat)?;
        debug!(?pos, barrier_nodes = self.barrier.len(), "pursuit started");
        Ok(())
    }

    /// Per-frame driver: wind-down check, barrier growth, heat propagation.
    pub fn update(&mut self, map: &mut InfluenceMap, dt: f32) {
        self.handle_stopping(map);
        self.propagate_barrier(map, dt);
        if self.started {
            map.propagate(dt);
        }
    }

    /// End the pursuit now: clear the field and release this pursuit's
    /// barrier blocks. Blocks from other sources stay.
    pub fn stop(&mut self, map: &mut InfluenceMap) {
        self.started = false;
        self.stopping = false;
        self.last_known_pos = Vec2::ZERO;
        self.last_known_velocity = Vec2::ZERO;

        map.reset_influence();
        map.unblock_where(BlockTag::Barrier);
        self.barrier.clear();
        self.time_since_barrier_update = 0.0;
        debug!("pursuit stopped");
    }

    /// Once the map has signalled wind-down, wait for the residual heat to
    /// cool to zero everywhere, then stop.
    fn handle_stopping(&mut self, map: &mut InfluenceMap) {
        self.stopping = map.should_end();
        if !self.stopping || !self.started {
            return;
        }

        let all_cold = map
            .graph()
            .iter_nodes()
            .all(|n| matches!(map.influence(n.id), Ok(v) if v == 0.0));
        if all_cold {
            self.stop(map);
        }
    }

    /// Grow the barrier on its own interval: unblocked non-source nodes
    /// adjacent to an existing barrier node and behind the target join it.
    fn propagate_barrier(&mut self, map: &mut InfluenceMap, dt: f32) {
        if !self.started || self.stopping {
            return;
        }

        self.time_since_barrier_update += dt;
        if self.time_since_barrier_update < self.update_interval {
            return;
        }
        self.time_since_barrier_update -= self.update_interval;

        let Some(source) = map.graph().node_at_position(self.last_known_pos) else {
            return;
        };

        let in_barrier: FxHashSet<NodeId> = self.barrier.iter().copied().collect();
        let mut additions: Vec<NodeId> = Vec::new();

        for node in map.graph().iter_nodes() {
            if node.id == source || map.is_blocked(node.id) {
                continue;
            }
            let touches_barrier = map
                .graph()
                .connections_from(node.id)
                .iter()
                .any(|c| in_barrier.contains(&c.to));
            if touches_barrier && self.is_behind(map, node.id) {
                additions.push(node.id);
            }
        }

        for id in additions {
            // Candidates were live and unblocked when scanned above.
            if map.block(id, BlockTag::Barrier).is_ok() {
                self.barrier.push(id);
            }
        }
    }

    /// Whether a node lies behind the moving target: its direction from the
    /// last known position deviates from the travel direction by at least
    /// the barrier angle. Degenerate directions (node at the source
    /// position, or zero velocity) count as in front.
    fn is_behind(&self, map: &InfluenceMap, id: NodeId) -> bool {
        let Ok(node_pos) = map.graph().position_of(id) else {
            return false;
        };
        let to_node = (node_pos - self.last_known_pos).normalized();
        if to_node == Vec2::ZERO || self.last_known_velocity == Vec2::ZERO {
            return false;
        }
        self.last_known_velocity.angle_between(to_node).abs() >= self.max_angle
    }
}
