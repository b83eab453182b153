//! # Classification Masks
//!
//! Derived once from the terrain when a placer is built and read-only
//! afterwards:
//!
//! | category | rule |
//! |----------|------|
//! | land     | `height > cutoff` |
//! | water    | `!land` |
//! | coast    | water within a band around the zero-height shoreline |
//!
//! The coast band is measured as a percentage of the larger map side, so a
//! 30 % band on a 256 x 256 map reaches 76 cells out from the shoreline.

use serde::{Deserialize, Serialize};

use crate::boundary::transition_mask;
use crate::grid::{Grid, Mask};
use crate::terrain::HeightOracle;

/// Which classification a location search draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    /// Above the land cutoff.
    Land,
    /// At or below the land cutoff.
    Water,
    /// Water near the shoreline.
    Coast,
}

/// Cells with `height > cutoff`.
#[must_use]
pub fn land_mask<H: HeightOracle + ?Sized>(oracle: &H, cutoff: f64) -> Mask {
    let (width, length) = oracle.dimensions();
    Grid::from_fn(width, length, |c| oracle.height(c) > cutoff)
}

/// Cells with `height <= cutoff`.
#[must_use]
pub fn water_mask<H: HeightOracle + ?Sized>(oracle: &H, cutoff: f64) -> Mask {
    land_mask(oracle, cutoff).not()
}

/// Width of the coast band in cells for a given map size.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn coast_band_radius(width: usize, length: usize, radius_percent: u32) -> usize {
    let side = width.max(length) as f64;
    (f64::from(radius_percent) / 100.0 * side).floor() as usize
}

/// Water cells within the coast band of the zero-height shoreline.
///
/// The shoreline is taken from the terrain binarised at height 0, not at
/// `cutoff`; the result is then restricted to `water_mask(cutoff)`, so it
/// never overlaps land.
#[must_use]
pub fn coast_mask<H: HeightOracle + ?Sized>(oracle: &H, cutoff: f64, radius_percent: u32) -> Mask {
    let (width, length) = oracle.dimensions();
    let above_sea = land_mask(oracle, 0.0);
    let shoreline = transition_mask(&above_sea);
    let radius = coast_band_radius(width, length, radius_percent);

    let mut band = Mask::new_with(width, length, false);
    for cell in shoreline.set_cells() {
        band.fill_disk(cell, radius, true);
    }

    tracing::debug!(
        "Coast band: {} shoreline cells, radius {}",
        shoreline.count(),
        radius
    );

    band.and(&water_mask(oracle, cutoff))
}

/// The three classification masks of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationMasks {
    /// Land cells.
    pub land: Mask,
    /// Water cells.
    pub water: Mask,
    /// Coastal water cells.
    pub coast: Mask,
}

impl ClassificationMasks {
    /// Classifies the whole terrain.
    #[must_use]
    pub fn build<H: HeightOracle + ?Sized>(oracle: &H, cutoff: f64, radius_percent: u32) -> Self {
        let land = land_mask(oracle, cutoff);
        let water = land.not();
        let coast = coast_mask(oracle, cutoff, radius_percent);
        Self { land, water, coast }
    }

    /// Mask for a category.
    #[must_use]
    pub const fn get(&self, category: LocationCategory) -> &Mask {
        match category {
            LocationCategory::Land => &self.land,
            LocationCategory::Water => &self.water,
            LocationCategory::Coast => &self.coast,
        }
    }

    /// `(width, length)` shared by all three masks.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        self.land.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Heightmap;
    use tidewater_shared::{GridCoord, DEFAULT_LAND_CUTOFF};

    /// 8x8: centre 2x2 at +50, ring of 0 around it, outer ring at -50.
    fn ring_map() -> Heightmap {
        Heightmap::from_fn(8, 8, |c| {
            let edge = c.x.min(c.z).min(7 - c.x).min(7 - c.z);
            match edge {
                0 => -50.0,
                3 => 50.0,
                _ => 0.0,
            }
        })
    }

    #[test]
    fn test_land_uses_strict_cutoff() {
        let map = Heightmap::from_fn(3, 1, |c| [-20.0, -19.5, -25.0][c.x]);
        let land = land_mask(&map, DEFAULT_LAND_CUTOFF);

        assert_eq!(land, Mask::from_rows(&[&[0], &[1], &[0]]));
    }

    #[test]
    fn test_water_is_complement() {
        let map = ring_map();
        let land = land_mask(&map, DEFAULT_LAND_CUTOFF);
        let water = water_mask(&map, DEFAULT_LAND_CUTOFF);

        assert!(!land.and(&water).any());
        assert_eq!(land.count() + water.count(), 64);
        assert_eq!(water.count(), 28, "outer ring only");
    }

    #[test]
    fn test_coast_and_land_disjoint() {
        let map = ring_map();
        let masks = ClassificationMasks::build(&map, DEFAULT_LAND_CUTOFF, 30);

        assert!(!masks.coast.and(&masks.land).any(), "coast must never touch land");
        assert!(masks.coast.any());
    }

    #[test]
    fn test_coast_band_radius() {
        assert_eq!(coast_band_radius(8, 8, 30), 2);
        assert_eq!(coast_band_radius(256, 100, 30), 76);
        assert_eq!(coast_band_radius(10, 10, 0), 0);
    }

    #[test]
    fn test_coast_reaches_only_the_band() {
        // Shoreline at x = 4/5 on a 20-wide strip, band radius 3.
        let map = Heightmap::from_fn(20, 1, |c| if c.x < 5 { 10.0 } else { -30.0 });
        let coast = coast_mask(&map, DEFAULT_LAND_CUTOFF, 15);

        let cells: Vec<_> = coast.set_cells().collect();
        let expected: Vec<_> = (5..=8).map(|x| GridCoord::new(x, 0)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_get_by_category() {
        let masks = ClassificationMasks::build(&ring_map(), DEFAULT_LAND_CUTOFF, 30);

        assert_eq!(masks.get(LocationCategory::Land), &masks.land);
        assert_eq!(masks.get(LocationCategory::Coast), &masks.coast);
        assert_eq!(masks.dimensions(), (8, 8));
    }
}
