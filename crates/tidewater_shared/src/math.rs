//! Coordinate types shared by the placement core and its callers.
//!
//! Grid space is `(x, z)` with `x` in `[0, width)` and `z` in `[0, length)`.
//! World space swaps the horizontal axes and scales them; that conversion
//! happens in exactly one place, [`grid_to_world`].

use serde::{Deserialize, Serialize};

use crate::constants::WORLD_SCALE;

/// A cell on the placement grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column, in `[0, width)`.
    pub x: usize,
    /// Row, in `[0, length)`.
    pub z: usize,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }

    /// Squared Euclidean distance to another cell (avoids sqrt).
    #[inline]
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> usize {
        let dx = self.x.abs_diff(other.x);
        let dz = self.z.abs_diff(other.z);
        dx * dx + dz * dz
    }

    /// Euclidean distance to another cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distance(self, other: Self) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Returns whether this cell lies inside a `width` x `length` grid.
    #[inline]
    #[must_use]
    pub const fn within(self, width: usize, length: usize) -> bool {
        self.x < width && self.z < length
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// 3D vector - placement positions and template offsets.
///
/// Inside the placement engine `x`/`z` are grid units and `y` is terrain height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component (vertical)
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Horizontal distance squared, ignoring `y`.
    #[must_use]
    pub fn horizontal_distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Converts a grid-space position to the file/world coordinate system.
///
/// The level files store `(z, y, x)` with both horizontal axes multiplied by
/// [`WORLD_SCALE`]. Height passes through untouched.
#[must_use]
pub fn grid_to_world(grid_x: f64, y: f64, grid_z: f64) -> Vec3 {
    Vec3::new(grid_z * WORLD_SCALE, y, grid_x * WORLD_SCALE)
}
