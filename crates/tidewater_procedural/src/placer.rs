//! # Object Placer
//!
//! The single owner of a generation run's mutable state: the occupancy mask
//! and the random source. Every placement follows the same sequence:
//!
//! 1. search a location (`LocationFinder::find_location`)
//! 2. validate it (height rules)
//! 3. mark occupancy exactly once
//! 4. return a [`PlacementRecord`]
//!
//! A failed search or a failed height check is a skip (`None`), never an
//! error. The only fatal case is an anchor with no room on the coast.

use serde::{Deserialize, Serialize};
use tidewater_shared::{
    GridCoord, Team, Vec3, ANCHOR_HEIGHT, ANCHOR_OBJECT_TYPE, ANCHOR_RADIUS, COAST_RADIUS_PERCENT,
    DEFAULT_LAND_CUTOFF, PATROL_POINT_RADIUS, SCENERY_RADIUS,
};

use crate::catalog::Catalog;
use crate::error::{PlacementError, PlacementResult};
use crate::location::LocationFinder;
use crate::masks::{ClassificationMasks, LocationCategory};
use crate::occupancy::OccupancyMask;
use crate::random::RandomSource;
use crate::record::PlacementRecord;
use crate::template::{ObjectContainer, Placeable, Template};
use crate::terrain::HeightOracle;

/// Tunables of the placer. Defaults match the shipped maps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacerConfig {
    /// Heights above this are land.
    pub land_cutoff: f64,
    /// Coast band width as a percentage of the larger map side.
    pub coast_radius_percent: u32,
    /// Keep-clear radius of the anchor.
    pub anchor_radius: f64,
    /// Fixed height of the anchor (it floats).
    pub anchor_height: f64,
    /// Object type of the anchor.
    pub anchor_type: String,
    /// Keep-clear radius of every scenery object.
    pub scenery_radius: f64,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            land_cutoff: DEFAULT_LAND_CUTOFF,
            coast_radius_percent: COAST_RADIUS_PERCENT,
            anchor_radius: ANCHOR_RADIUS,
            anchor_height: ANCHOR_HEIGHT,
            anchor_type: ANCHOR_OBJECT_TYPE.to_string(),
            scenery_radius: SCENERY_RADIUS,
        }
    }
}

/// Places objects on one terrain without overlap.
#[derive(Debug)]
pub struct ObjectPlacer<H> {
    terrain: H,
    finder: LocationFinder,
    occupancy: OccupancyMask,
    random: RandomSource,
    config: PlacerConfig,
}

impl<H: HeightOracle> ObjectPlacer<H> {
    /// Classifies `terrain` and creates a placer with a fully free map.
    #[must_use]
    pub fn new(terrain: H, random: RandomSource, config: PlacerConfig) -> Self {
        let (width, length) = terrain.dimensions();
        let masks = ClassificationMasks::build(&terrain, config.land_cutoff, config.coast_radius_percent);

        tracing::info!(
            "Placer ready: {}x{} map, {} land / {} coast cells, seed {}",
            width,
            length,
            masks.land.count(),
            masks.coast.count(),
            random.seed()
        );

        Self {
            terrain,
            finder: LocationFinder::new(masks),
            occupancy: OccupancyMask::new(width, length),
            random,
            config,
        }
    }

    /// Creates a placer with [`PlacerConfig::default`].
    #[must_use]
    pub fn with_defaults(terrain: H, random: RandomSource) -> Self {
        Self::new(terrain, random, PlacerConfig::default())
    }

    /// The run's random source; every draw of the run must go through it.
    pub fn random(&mut self) -> &mut RandomSource {
        &mut self.random
    }

    /// Current occupancy (read-only).
    #[must_use]
    pub const fn occupancy(&self) -> &OccupancyMask {
        &self.occupancy
    }

    /// The classification masks.
    #[must_use]
    pub const fn masks(&self) -> &ClassificationMasks {
        self.finder.masks()
    }

    /// The terrain being placed on.
    #[must_use]
    pub const fn terrain(&self) -> &H {
        &self.terrain
    }

    /// Placer settings.
    #[must_use]
    pub const fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// `(width, length)` of the map.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.terrain.dimensions()
    }

    /// Searches a location without placing anything.
    pub fn find_location(&mut self, category: LocationCategory, radius: f64) -> Option<GridCoord> {
        self.finder
            .find_location(category, radius, &self.occupancy, &mut self.random)
    }

    /// Places the player's anchor on the coast, facing the map centre.
    ///
    /// # Errors
    ///
    /// `PlacementError::NoAnchorSpace` when the coast has no room. A map
    /// without an anchor is unusable, so callers should abort the run.
    pub fn place_anchor(&mut self) -> PlacementResult<PlacementRecord> {
        let radius = self.config.anchor_radius;
        let coord = self
            .find_location(LocationCategory::Coast, radius)
            .ok_or(PlacementError::NoAnchorSpace { radius })?;

        let rotation = self.facing_centre(coord);
        self.occupancy.mark_occupied(coord, radius);

        let record = PlacementRecord::new(
            self.config.anchor_type.clone(),
            grid_position(coord, self.config.anchor_height),
            Team::Player,
            rotation,
            radius,
        );
        tracing::info!("Anchor placed at {} facing {:.1} degrees", coord, rotation);
        Ok(record)
    }

    /// Places one object at a random land location.
    ///
    /// Returns `None` (nothing changed) when no location fits or when the
    /// final height `terrain + y_offset` would be below zero.
    pub fn place_on_land_random(
        &mut self,
        object_type: &str,
        radius: f64,
        y_offset: f64,
        rotation: f64,
        team: Team,
    ) -> Option<PlacementRecord> {
        let Some(coord) = self.find_location(LocationCategory::Land, radius) else {
            tracing::debug!("Skipped {}: no land location", object_type);
            return None;
        };

        let height = self.terrain.height(coord) + y_offset;
        if height < 0.0 {
            tracing::debug!("Skipped {} at {}: height {:.2} under water", object_type, coord, height);
            return None;
        }

        self.occupancy.mark_occupied(coord, radius);
        Some(PlacementRecord::new(
            object_type,
            grid_position(coord, height),
            team,
            rotation,
            radius,
        ))
    }

    /// [`Self::place_on_land_random`] for a container, keeping its attachment.
    pub fn place_container_on_land(&mut self, container: &ObjectContainer, rotation: f64) -> Option<PlacementRecord> {
        let mut record = self.place_on_land_random(
            &container.object_type,
            container.radius,
            container.y_offset,
            rotation,
            container.team,
        )?;
        record.attachment.clone_from(&container.attachment);
        Some(record)
    }

    /// Scatters neutral scenery on land, `count` copies of each type in order.
    ///
    /// Objects that do not fit are skipped; the rest are returned.
    pub fn place_scenery(&mut self, scenery: &[(&str, usize)]) -> Vec<PlacementRecord> {
        let radius = self.config.scenery_radius;
        let requested: usize = scenery.iter().map(|(_, count)| count).sum();
        let mut placed = Vec::with_capacity(requested);

        for (object_type, count) in scenery {
            for _ in 0..*count {
                if let Some(record) = self.place_on_land_random(object_type, radius, 0.0, 0.0, Team::Neutral) {
                    placed.push(record);
                }
            }
        }

        tracing::info!(
            "Scenery: placed {} of {} objects ({} skipped)",
            placed.len(),
            requested,
            requested - placed.len()
        );
        placed
    }

    /// Picks up to `n` land points for a patrol route.
    ///
    /// Points do not occupy the map. Stops at the first failed search, so
    /// fewer than `n` points may come back.
    pub fn create_patrol_points(&mut self, n: usize) -> Vec<GridCoord> {
        let mut points = Vec::with_capacity(n);
        for _ in 0..n {
            match self.find_location(LocationCategory::Land, PATROL_POINT_RADIUS) {
                Some(point) => points.push(point),
                None => {
                    tracing::debug!("Patrol route cut short at {} of {} points", points.len(), n);
                    break;
                }
            }
        }
        points
    }

    /// Places an object at a fixed cell, bypassing the search.
    ///
    /// Returns `None` (nothing changed) when the cell is off the map, already
    /// occupied, or the final height `terrain + y_offset` is below zero.
    pub fn place_at(&mut self, container: &ObjectContainer, coord: GridCoord, rotation: f64) -> Option<PlacementRecord> {
        if !self.occupancy.is_free(coord) {
            tracing::debug!("Skipped {} at {}: cell is occupied or off the map", container.object_type, coord);
            return None;
        }
        self.place_checked(container, coord, rotation)
    }

    /// Places an object on the free land cell closest to `target`.
    ///
    /// Draws no randomness. `None` when no land cell fits or the result
    /// would be under water.
    pub fn place_near_on_land(
        &mut self,
        container: &ObjectContainer,
        target: GridCoord,
        rotation: f64,
    ) -> Option<PlacementRecord> {
        let Some(coord) = self
            .finder
            .find_nearest(LocationCategory::Land, container.radius, &self.occupancy, target)
        else {
            tracing::debug!("Skipped {}: no land near {}", container.object_type, target);
            return None;
        };
        self.place_checked(container, coord, rotation)
    }

    /// Places a template: the primary with the land rule, every other part
    /// at the primary's position plus its template offset.
    ///
    /// Secondary parts sit inside the primary's keep-clear disk and do not
    /// mark occupancy themselves. `None` if the primary was skipped.
    pub fn place_template_on_land(&mut self, template: &Template, rotation: f64) -> Option<Vec<PlacementRecord>> {
        let primary = self.place_container_on_land(template.primary(), rotation)?;
        let origin = primary.position;

        let mut records = Vec::with_capacity(template.parts().len());
        records.push(primary);
        for part in template.secondaries() {
            let mut record = PlacementRecord::new(
                part.object_type.clone(),
                origin + part.template_offset,
                part.team,
                rotation,
                part.radius,
            );
            record.attachment.clone_from(&part.attachment);
            records.push(record);
        }
        Some(records)
    }

    /// Draws from a weighted catalog and places the result on land.
    ///
    /// An empty vector means the draw was skipped for lack of room.
    ///
    /// # Errors
    ///
    /// Only if the catalog cannot be drawn from.
    pub fn place_choice_on_land(
        &mut self,
        catalog: &Catalog<Placeable>,
        rotation: f64,
    ) -> PlacementResult<Vec<PlacementRecord>> {
        let choice = self.random.weighted_choose(catalog)?;
        let placed = match choice {
            Placeable::Object(container) => self.place_container_on_land(container, rotation).map(|r| vec![r]),
            Placeable::Template(template) => self.place_template_on_land(template, rotation),
        };
        Ok(placed.unwrap_or_default())
    }

    /// Gives back the terrain and random source once the run is done.
    pub fn into_parts(self) -> (H, RandomSource) {
        (self.terrain, self.random)
    }

    /// Height check, carve and record for an already chosen cell.
    fn place_checked(&mut self, container: &ObjectContainer, coord: GridCoord, rotation: f64) -> Option<PlacementRecord> {
        let height = self.terrain.height(coord) + container.y_offset;
        if height < 0.0 {
            tracing::debug!("Skipped {} at {}: height {:.2} under water", container.object_type, coord, height);
            return None;
        }

        self.occupancy.mark_occupied(coord, container.radius);
        let mut record = PlacementRecord::new(
            container.object_type.clone(),
            grid_position(coord, height),
            container.team,
            rotation,
            container.radius,
        );
        record.attachment.clone_from(&container.attachment);
        Some(record)
    }

    /// Degrees from `coord` toward the map centre, `atan2(dz, dx)`.
    #[allow(clippy::cast_precision_loss)]
    fn facing_centre(&self, coord: GridCoord) -> f64 {
        let (width, length) = self.dimensions();
        let centre_x = width as f64 / 2.0;
        let centre_z = length as f64 / 2.0;
        (centre_z - coord.z as f64).atan2(centre_x - coord.x as f64).to_degrees()
    }
}

#[allow(clippy::cast_precision_loss)]
fn grid_position(coord: GridCoord, height: f64) -> Vec3 {
    Vec3::new(coord.x as f64, height, coord.z as f64)
}
