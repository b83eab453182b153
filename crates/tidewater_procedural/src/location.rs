//! # Location Finder
//!
//! Picks a random free cell of a category that can hold an object of a given
//! keep-clear radius:
//!
//! 1. `candidates = category mask AND free cells`
//! 2. erode: block a disk of `clearance_radius(radius) / 2` around every
//!    boundary cell of `candidates`
//! 3. pick uniformly among what is left, in x-major order, or take the cell
//!    nearest to a target ([`LocationFinder::find_nearest`])
//!
//! Eroding by half the radius keeps objects away from the edges of their
//! region and from each other's keep-clear disks. For large radii a disk can
//! still poke slightly across a classification boundary; the approximation is
//! kept so existing seeds keep producing the same maps.

use tidewater_shared::GridCoord;

use crate::boundary::transition_mask;
use crate::grid::{clearance_radius, Mask};
use crate::masks::{ClassificationMasks, LocationCategory};
use crate::occupancy::OccupancyMask;
use crate::random::RandomSource;

/// Radius-aware random location search over fixed classification masks.
#[derive(Clone, Debug)]
pub struct LocationFinder {
    masks: ClassificationMasks,
}

impl LocationFinder {
    /// Creates a finder over already classified terrain.
    #[must_use]
    pub const fn new(masks: ClassificationMasks) -> Self {
        Self { masks }
    }

    /// The classification masks searched by this finder.
    #[must_use]
    pub const fn masks(&self) -> &ClassificationMasks {
        &self.masks
    }

    /// Finds a random location, or `None` when nothing fits.
    ///
    /// Consumes exactly one random draw when a location exists and none
    /// otherwise. Never touches `occupancy`.
    ///
    /// # Panics
    ///
    /// If `occupancy` does not have the masks' dimensions.
    pub fn find_location(
        &self,
        category: LocationCategory,
        radius: f64,
        occupancy: &OccupancyMask,
        random: &mut RandomSource,
    ) -> Option<GridCoord> {
        let free: Vec<GridCoord> = self.eligible(category, radius, occupancy).set_cells().collect();
        if free.is_empty() {
            tracing::debug!("No free {:?} location for radius {}", category, radius);
            return None;
        }

        let index = random.uniform_index(free.len()).ok()?;
        Some(free[index])
    }

    /// Finds the eligible location closest to `target`, or `None`.
    ///
    /// Uses the same eligibility as [`Self::find_location`] but draws no
    /// randomness; ties go to the first cell in x-major order.
    ///
    /// # Panics
    ///
    /// If `occupancy` does not have the masks' dimensions.
    pub fn find_nearest(
        &self,
        category: LocationCategory,
        radius: f64,
        occupancy: &OccupancyMask,
        target: GridCoord,
    ) -> Option<GridCoord> {
        let nearest = self
            .eligible(category, radius, occupancy)
            .set_cells()
            .min_by_key(|cell| cell.distance_squared(target));
        if nearest.is_none() {
            tracing::debug!("No free {:?} location near {} for radius {}", category, target, radius);
        }
        nearest
    }

    /// Free cells of `category`, eroded by half the clearance radius.
    fn eligible(&self, category: LocationCategory, radius: f64, occupancy: &OccupancyMask) -> Mask {
        let candidates = self.masks.get(category).and(occupancy.grid());

        let half_radius = clearance_radius(radius) / 2;
        let mut eroded = candidates.clone();
        for edge in transition_mask(&candidates).set_cells() {
            eroded.fill_disk(edge, half_radius, false);
        }
        eroded
    }
}
