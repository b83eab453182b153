//! # Occupancy Mask
//!
//! Tracks which cells are still free. Created fully free, only ever narrowed.
//! The raw grid is never handed out mutably; the only way to change it is
//! [`OccupancyMask::mark_occupied`].

use tidewater_shared::GridCoord;

use crate::grid::{clearance_radius, Mask};

/// Free (`true`) / occupied (`false`) cells of one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyMask {
    free: Mask,
}

impl OccupancyMask {
    /// Creates a fully free mask.
    #[must_use]
    pub fn new(width: usize, length: usize) -> Self {
        Self {
            free: Mask::new_with(width, length, true),
        }
    }

    /// Blocks the disk of `clearance_radius(radius)` around `center`.
    pub fn mark_occupied(&mut self, center: GridCoord, radius: f64) {
        self.free.fill_disk(center, clearance_radius(radius), false);
    }

    /// Returns whether `coord` is inside the map and unoccupied.
    #[inline]
    #[must_use]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.free.is_set(coord)
    }

    /// Number of free cells.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.count()
    }

    /// Read-only view, `true` = free.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Mask {
        &self.free
    }

    /// `(width, length)`.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        self.free.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_free() {
        let occupancy = OccupancyMask::new(6, 5);

        assert_eq!(occupancy.free_count(), 30);
        assert!(occupancy.is_free(GridCoord::new(5, 4)));
        assert!(!occupancy.is_free(GridCoord::new(6, 0)), "outside is never free");
    }

    #[test]
    fn test_small_radius_still_blocks_a_plus() {
        let mut occupancy = OccupancyMask::new(5, 5);
        occupancy.mark_occupied(GridCoord::new(2, 2), 0.3);

        assert_eq!(occupancy.free_count(), 20);
        assert!(!occupancy.is_free(GridCoord::new(2, 3)));
    }

    #[test]
    fn test_marking_is_monotonic() {
        let mut occupancy = OccupancyMask::new(16, 16);
        let mut previous = occupancy.free_count();

        for (x, z, r) in [(3, 3, 2.0), (3, 4, 2.0), (12, 12, 4.0), (0, 15, 1.0)] {
            occupancy.mark_occupied(GridCoord::new(x, z), r);
            let now = occupancy.free_count();
            assert!(now <= previous, "free cells grew from {previous} to {now}");
            previous = now;
        }
    }
}
