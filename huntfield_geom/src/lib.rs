// Minimal 2D geometry for the Huntfield simulation.
//
// This crate is the single source of vector and color math used across the
// project: `huntfield_sim` (graph positions, barrier angle tests, influence
// visualization payloads) and any front-end embedding it. It is hand-rolled
// with zero dependencies beyond serde, chosen so the simulation crate never
// pulls in a full linear-algebra stack for what amounts to a handful of
// float operations.
//
// **Critical constraint: determinism.** Every function here is a pure
// function of its inputs using plain f32 arithmetic. No platform intrinsics,
// no approximate fast-math paths.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector / world-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length. Cheaper than `length` for comparisons.
    pub fn sqr_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross).
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Unit vector in the same direction. A zero-length vector normalizes
    /// to `Vec2::ZERO` rather than producing NaN.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            Self::ZERO
        } else {
            Self::new(self.x / len, self.y / len)
        }
    }

    /// Signed angle in radians from `self` to `other`, in `(-PI, PI]`.
    ///
    /// Zero-length inputs yield 0 (degenerate directions are treated as
    /// aligned, never as an error).
    pub fn angle_between(self, other: Self) -> f32 {
        if self.sqr_length() <= f32::EPSILON || other.sqr_length() <= f32::EPSILON {
            return 0.0;
        }
        self.cross(other).atan2(self.dot(other))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Linear interpolation between two scalars. `t` is not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Degrees to radians.
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// An RGB color with components in `[0, 1]`, used as a display payload for
/// influence nodes. The simulation never renders; it only computes these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Component-wise linear interpolation toward `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
        )
    }
}
