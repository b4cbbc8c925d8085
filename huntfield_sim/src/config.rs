// Data-driven simulation configuration.
//
// All tunable parameters live here in `SimConfig`, loaded from JSON at
// scenario setup. The sim never uses magic numbers — it reads from the
// config. Defaults reproduce the reference tuning the pursuit scenario was
// balanced against (momentum 0.8, decay 0.1, 50 ms propagation interval,
// heat ceiling 9, 75° barrier half-angle).
//
// Parameters are grouped into sub-structs: `GridConfig` (world layout),
// `PropagationConfig` (influence diffusion), and `BarrierConfig` (pursuit
// barrier growth).
//
// See also: `grid.rs` which consumes `GridConfig`, `influence.rs` which
// consumes `PropagationConfig`, `chase.rs` which consumes `BarrierConfig`.
//
// **Critical constraint: determinism.** Config values feed directly into
// simulation logic; identical configs yield identical runs.

use crate::error::ConfigError;
use huntfield_geom::to_radians;
use serde::{Deserialize, Serialize};

/// Which influence-propagation policy a scenario runs. A configuration
/// choice, never auto-detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropagationPolicy {
    /// Exponential falloff over connection cost, blended with the node's
    /// current value. General-purpose influence fields (threat, claim).
    Momentum,
    /// Wavefront of maximum heat spreading from a source, cooling by one
    /// unit per step behind the front. Used to predict a lost target.
    Heat,
}

/// Uniform-grid world layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of cells along the x axis.
    pub columns: u32,
    /// Number of cells along the y axis.
    pub rows: u32,
    /// World-space size of one square cell.
    pub cell_size: f32,
    /// Whether to connect diagonal neighbors (8-connected) in addition to
    /// the 4 cardinal neighbors.
    pub connect_diagonally: bool,
    /// Whether connections are one-way. When false every add/remove of a
    /// connection mirrors automatically so traversal is symmetric.
    pub directed: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 25,
            rows: 25,
            cell_size: 5.0,
            connect_diagonally: true,
            directed: false,
        }
    }
}

/// Influence-diffusion tuning shared by both propagation policies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropagationConfig {
    /// Active policy.
    pub policy: PropagationPolicy,
    /// Simulated seconds between propagation steps. Accumulated `dt` fires
    /// at most one step per elapse; the remainder carries over.
    pub interval: f32,
    /// Tendency to retain the current value, in [0, 1]. Near 1 the field
    /// changes slowly; near 0 it snaps to the incoming candidate.
    /// Momentum policy only.
    pub momentum: f32,
    /// Falloff of influence over connection cost, in [0, 1]. Momentum
    /// policy only.
    pub decay: f32,
    /// Clamp magnitude for the momentum policy: values stay within
    /// `[-max_abs_influence, +max_abs_influence]`.
    pub max_abs_influence: f32,
    /// Heat assigned to newly reached cells. Heated cells cool by one unit
    /// per step, so this is also the number of steps a cell stays warm.
    /// Heat policy only.
    pub max_heat: f32,
    /// Wavefront size cap: once a single step heats at least this many
    /// cells, the map signals that the search should wind down.
    pub max_heated_cells: u32,
    /// Step-count cap: the map signals wind-down after this many
    /// consecutive propagation steps regardless of coverage.
    pub max_propagation_steps: u32,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            policy: PropagationPolicy::Heat,
            interval: 0.05,
            momentum: 0.8,
            decay: 0.1,
            max_abs_influence: 100.0,
            max_heat: 9.0,
            max_heated_cells: 15,
            max_propagation_steps: 20,
        }
    }
}

/// Pursuit-barrier tuning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarrierConfig {
    /// Angular threshold in radians. A node whose direction from the lost
    /// target's position deviates from its travel direction by at least
    /// this angle counts as "behind" it and becomes a barrier node.
    pub max_angle: f32,
    /// Simulated seconds between barrier-growth updates. Independent of the
    /// influence propagation interval.
    pub update_interval: f32,
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self {
            max_angle: to_radians(75.0),
            update_interval: 0.05,
        }
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimConfig {
    pub grid: GridConfig,
    pub propagation: PropagationConfig,
    pub barrier: BarrierConfig,
}

impl SimConfig {
    /// Parse a config from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check every numeric field against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(
            ok: bool,
            field: &'static str,
            expected: &'static str,
            got: f32,
        ) -> Result<(), ConfigError> {
            if ok {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange {
                    field,
                    expected,
                    got,
                })
            }
        }

        let g = &self.grid;
        check(g.columns >= 1, "grid.columns", ">= 1", g.columns as f32)?;
        check(g.rows >= 1, "grid.rows", ">= 1", g.rows as f32)?;
        check(g.cell_size > 0.0, "grid.cell_size", "> 0", g.cell_size)?;

        let p = &self.propagation;
        check(p.interval > 0.0, "propagation.interval", "> 0", p.interval)?;
        check(
            (0.0..=1.0).contains(&p.momentum),
            "propagation.momentum",
            "in [0, 1]",
            p.momentum,
        )?;
        check(
            (0.0..=1.0).contains(&p.decay),
            "propagation.decay",
            "in [0, 1]",
            p.decay,
        )?;
        check(
            p.max_abs_influence > 0.0,
            "propagation.max_abs_influence",
            "> 0",
            p.max_abs_influence,
        )?;
        check(p.max_heat > 0.0, "propagation.max_heat", "> 0", p.max_heat)?;
        check(
            p.max_heated_cells >= 1,
            "propagation.max_heated_cells",
            ">= 1",
            p.max_heated_cells as f32,
        )?;
        check(
            p.max_propagation_steps >= 1,
            "propagation.max_propagation_steps",
            ">= 1",
            p.max_propagation_steps as f32,
        )?;

        let b = &self.barrier;
        check(
            b.max_angle > 0.0 && b.max_angle <= std::f32::consts::PI,
            "barrier.max_angle",
            "in (0, PI]",
            b.max_angle,
        )?;
        check(
            b.update_interval > 0.0,
            "barrier.update_interval",
            "> 0",
            b.update_interval,
        )?;

        Ok(())
    }
}
