//! # Layout Generation
//!
//! One run, start to finish:
//!
//! 1. seed the random source (config or entropy)
//! 2. classify the terrain and build the placer
//! 3. anchor on the coast (fatal if it does not fit)
//! 4. map revealer on the land nearest the anchor
//! 5. enemy structures and battle scrap from weighted catalogs
//! 6. default scenery
//! 7. patrol route
//! 8. flyers, each assigned to the patrol route
//!
//! Every draw goes through the placer's random source in this order, so a
//! config with a pinned seed always yields the same layout.

use serde::Serialize;
use tidewater_content::{catalogs, objects, DEFAULT_SCENERY};
use tidewater_procedural::{Catalog, HeightOracle, ObjectPlacer, Placeable, PlacementRecord, RandomSource};
use tidewater_shared::GridCoord;

use crate::config::MapConfig;
use crate::error::GenerationResult;

/// Name of the route every flyer follows.
pub const PATROL_ROUTE_NAME: &str = "patrol1";

/// A named patrol route and the flyers assigned to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatrolRoute {
    /// Route name.
    pub name: String,
    /// Waypoints in visiting order.
    pub points: Vec<GridCoord>,
    /// Indices into [`GeneratedLayout::records`] of the assigned units.
    pub assigned: Vec<usize>,
}

/// Result of a generation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedLayout {
    /// Seed actually used.
    pub seed: u64,
    /// Every placed object, anchor first.
    pub records: Vec<PlacementRecord>,
    /// Patrol routes.
    pub patrol_routes: Vec<PatrolRoute>,
    /// The input config with the seed pinned; save it to replay the run.
    pub config: MapConfig,
}

impl GeneratedLayout {
    /// Records of one object type.
    pub fn records_of<'a>(&'a self, object_type: &'a str) -> impl Iterator<Item = &'a PlacementRecord> + 'a {
        self.records.iter().filter(move |r| r.object_type == object_type)
    }

    /// The anchor record.
    #[must_use]
    pub fn anchor(&self) -> Option<&PlacementRecord> {
        self.records.first()
    }
}

/// Generates a full layout on `terrain`.
///
/// # Errors
///
/// `GenerationError::Placement` if the anchor cannot be placed or a catalog
/// cannot be drawn from, `GenerationError::Content` if built-in content is
/// invalid.
pub fn generate_layout<H: HeightOracle>(terrain: H, config: &MapConfig) -> GenerationResult<GeneratedLayout> {
    let random = match config.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            RandomSource::new(seed)
        }
        None => {
            let random = RandomSource::from_entropy();
            tracing::info!("Using random seed {}", random.seed());
            random
        }
    };
    let seed = random.seed();

    let mut placer = ObjectPlacer::new(terrain, random, config.placer.clone());
    let mut records = Vec::new();

    tracing::info!("Adding anchor");
    let anchor = placer.place_anchor()?;
    let anchor_coord = anchor.grid_coord();
    records.push(anchor);

    tracing::info!("Adding map revealer near the anchor");
    records.extend(placer.place_near_on_land(&objects::map_revealer(), anchor_coord, 0.0));

    let enemy_count = count_or_draw(config.num_enemy_structures, placer.random(), 1, 5)?;
    tracing::info!("Adding {} enemy structures", enemy_count);
    place_from_catalog(&mut placer, &catalogs::base_all_other()?, enemy_count, &mut records)?;

    let scrap_count = count_or_draw(config.num_scrap_piles, placer.random(), 1, 5)?;
    tracing::info!("Adding {} scrap piles", scrap_count);
    place_from_catalog(&mut placer, &catalogs::scrap_battle()?, scrap_count, &mut records)?;

    tracing::info!("Adding scenery");
    records.extend(placer.place_scenery(DEFAULT_SCENERY));

    let point_count = count_or_draw(config.num_patrol_points, placer.random(), 3, 7)?;
    tracing::info!("Creating {} patrol points", point_count);
    let mut route = PatrolRoute {
        name: PATROL_ROUTE_NAME.to_string(),
        points: placer.create_patrol_points(point_count),
        assigned: Vec::new(),
    };

    let flyer_count = count_or_draw(config.num_flyers, placer.random(), 3, 7)?;
    tracing::info!("Adding {} flyers with patrol routes", flyer_count);
    let flyer = objects::medium_flyer();
    for _ in 0..flyer_count {
        if let Some(record) = placer.place_container_on_land(&flyer, 0.0) {
            route.assigned.push(records.len());
            records.push(record);
        }
    }

    tracing::info!("Layout done: {} objects, seed {}", records.len(), seed);
    Ok(GeneratedLayout {
        seed,
        records,
        patrol_routes: vec![route],
        config: config.with_seed(seed),
    })
}

/// Configured count, or a draw from `[min, max)`.
fn count_or_draw(fixed: Option<u32>, random: &mut RandomSource, min: i64, max: i64) -> GenerationResult<usize> {
    let count = match fixed {
        Some(count) => i64::from(count),
        None => random.uniform_int(min, max)?,
    };
    Ok(usize::try_from(count).unwrap_or(0))
}

fn place_from_catalog<H: HeightOracle>(
    placer: &mut ObjectPlacer<H>,
    catalog: &Catalog<Placeable>,
    count: usize,
    records: &mut Vec<PlacementRecord>,
) -> GenerationResult<()> {
    for _ in 0..count {
        records.extend(placer.place_choice_on_land(catalog, 0.0)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_procedural::Heightmap;

    #[test]
    fn test_count_or_draw_prefers_config() {
        let mut random = RandomSource::new(1);
        assert_eq!(count_or_draw(Some(9), &mut random, 3, 7).unwrap(), 9);
    }

    #[test]
    fn test_count_or_draw_range() {
        let mut random = RandomSource::new(1);
        for _ in 0..100 {
            let count = count_or_draw(None, &mut random, 3, 7).unwrap();
            assert!((3..7).contains(&count));
        }
    }

    #[test]
    fn test_revealer_on_land_beside_anchor() {
        let island = Heightmap::from_fn(48, 48, |c| {
            if (14..34).contains(&c.x) && (14..34).contains(&c.z) {
                20.0
            } else {
                -50.0
            }
        });
        let mut config = MapConfig::default().with_seed(17);
        config.placer.anchor_radius = 6.0;

        let layout = generate_layout(island, &config).unwrap();
        let anchor = layout.anchor().unwrap();
        let revealer = &layout.records[1];

        assert_eq!(revealer.object_type, "MapRevealer1");
        assert!(revealer.position.y >= 0.0, "revealer below sea level: y={}", revealer.position.y);
        assert!(revealer.grid_coord().distance_squared(anchor.grid_coord()) > 36);
    }

    #[test]
    fn test_no_coast_is_fatal() {
        let config = MapConfig::default().with_seed(1);
        assert!(generate_layout(Heightmap::flat(32, 32, 40.0), &config).is_err());
    }
}
