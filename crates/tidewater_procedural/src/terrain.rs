//! # Terrain Height Oracle
//!
//! The placement engine never generates terrain. It consumes any type that
//! can answer "how wide, how long, how high here" through [`HeightOracle`].
//! [`Heightmap`] is the plain in-memory implementation used by the pipeline,
//! the demo and the tests.

use tidewater_shared::GridCoord;

use crate::grid::Grid;

/// Read-only source of terrain heights.
///
/// Heights are signed; values at or below the land cutoff are water.
/// Implementations must answer for every coordinate inside
/// [`HeightOracle::dimensions`]; callers never ask outside it.
pub trait HeightOracle {
    /// `(width, length)` of the terrain in grid cells.
    fn dimensions(&self) -> (usize, usize);

    /// Height at `coord`.
    fn height(&self, coord: GridCoord) -> f64;
}

/// Dense heightmap backed by a [`Grid`].
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
    heights: Grid<f64>,
}

impl Heightmap {
    /// Creates a flat heightmap.
    #[must_use]
    pub fn flat(width: usize, length: usize, height: f64) -> Self {
        Self {
            heights: Grid::new_with(width, length, height),
        }
    }

    /// Creates a heightmap by evaluating `f` for every cell.
    #[must_use]
    pub fn from_fn<F: FnMut(GridCoord) -> f64>(width: usize, length: usize, f: F) -> Self {
        Self {
            heights: Grid::from_fn(width, length, f),
        }
    }

    /// Wraps an existing grid of heights.
    #[must_use]
    pub const fn from_grid(heights: Grid<f64>) -> Self {
        Self { heights }
    }

    /// Overwrites one height. Out-of-range coordinates are ignored.
    pub fn set_height(&mut self, coord: GridCoord, height: f64) {
        self.heights.set(coord, height);
    }

    /// The underlying grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid<f64> {
        &self.heights
    }
}

impl HeightOracle for Heightmap {
    fn dimensions(&self) -> (usize, usize) {
        self.heights.dimensions()
    }

    fn height(&self, coord: GridCoord) -> f64 {
        self.heights.get(coord).copied().unwrap_or(f64::NEG_INFINITY)
    }
}

impl<H: HeightOracle + ?Sized> HeightOracle for &H {
    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn height(&self, coord: GridCoord) -> f64 {
        (**self).height(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_heightmap() {
        let map = Heightmap::flat(4, 3, 12.5);

        assert_eq!(map.dimensions(), (4, 3));
        assert!((map.height(GridCoord::new(3, 2)) - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outside_reads_as_deep_water() {
        let map = Heightmap::flat(2, 2, 50.0);
        assert!(map.height(GridCoord::new(5, 0)).is_infinite());
    }

    #[test]
    fn test_set_height() {
        let mut map = Heightmap::from_fn(3, 3, |c| c.x as f64);
        map.set_height(GridCoord::new(1, 1), -40.0);

        assert!((map.height(GridCoord::new(1, 1)) + 40.0).abs() < f64::EPSILON);
        assert!((map.height(GridCoord::new(2, 0)) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reference_is_an_oracle() {
        fn width_of(oracle: impl HeightOracle) -> usize {
            oracle.dimensions().0
        }

        let map = Heightmap::flat(7, 1, 0.0);
        assert_eq!(width_of(&map), 7);
    }
}
