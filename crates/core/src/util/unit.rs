use derive_more::{Add, AddAssign, Display, Sub};
use serde::{Deserialize, Serialize};

/// A point (or offset) in continuous 3D space. `x` and `y` span the plane
/// that the hex grid is laid out on, and `z` is height. Points are plain
/// values: every operation produces a new point rather than mutating.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Sub,
    AddAssign,
    Serialize,
    Deserialize,
)]
#[display(
    fmt = "{{x={}, y={}, z={}}}",
    "round3(self.x)",
    "round3(self.y)",
    "round3(self.z)"
)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Copy of this point with a different height
    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }
}

/// Round to 3 decimal places, for display only
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
