//! Placement records: what the placer hands back for every placed object.

use serde::{Deserialize, Serialize};
use tidewater_shared::{grid_to_world, GridCoord, Team, Vec3};

/// One placed object.
///
/// `position.x` / `position.z` are grid cells, `position.y` is the final
/// height (terrain height plus vertical offset, or the fixed anchor height).
/// Writers convert to file space with [`PlacementRecord::world_position`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Object type name as used by the level files.
    pub object_type: String,
    /// Grid-space position with final height.
    pub position: Vec3,
    /// Owning team.
    pub team: Team,
    /// Facing in degrees.
    pub rotation: f64,
    /// Optional attached object type (turret, weapon, ...).
    pub attachment: Option<String>,
    /// Keep-clear radius the object was placed with.
    pub required_radius: f64,
}

impl PlacementRecord {
    /// Creates a record without attachment.
    #[must_use]
    pub fn new(object_type: impl Into<String>, position: Vec3, team: Team, rotation: f64, required_radius: f64) -> Self {
        Self {
            object_type: object_type.into(),
            position,
            team,
            rotation,
            attachment: None,
            required_radius,
        }
    }

    /// Grid cell of this record.
    ///
    /// Template parts carry fractional offsets; the cell is the rounded
    /// position, clamped at zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn grid_coord(&self) -> GridCoord {
        GridCoord::new(
            self.position.x.round().max(0.0) as usize,
            self.position.z.round().max(0.0) as usize,
        )
    }

    /// Position in file/world space.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        grid_to_world(self.position.x, self.position.y, self.position.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_shared::WORLD_SCALE;

    #[test]
    fn test_grid_coord_rounds() {
        let record = PlacementRecord::new("Alienackackgun", Vec3::new(4.008, 30.0, 6.45), Team::Enemy, 0.0, 2.0);
        assert_eq!(record.grid_coord(), GridCoord::new(4, 6));
    }

    #[test]
    fn test_world_position_swaps_axes() {
        let record = PlacementRecord::new("palm1", Vec3::new(1.0, 3.0, 2.0), Team::Neutral, 0.0, 2.0);
        let world = record.world_position();

        assert!((world.x - 2.0 * WORLD_SCALE).abs() < 1e-9);
        assert!((world.z - WORLD_SCALE).abs() < 1e-9);
        assert!((world.y - 3.0).abs() < 1e-9);
    }
}
