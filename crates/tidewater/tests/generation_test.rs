//! # Generation Pipeline Tests
//!
//! Full runs on a synthetic island: reproducibility from a saved config,
//! patrol assignments, and the objects every map must contain.

use tidewater::procedural::Heightmap;
use tidewater::shared::Team;
use tidewater::{generate_layout, GeneratedLayout, MapConfig, PATROL_ROUTE_NAME};

fn island() -> Heightmap {
    Heightmap::from_fn(128, 128, |c| {
        let dx = c.x as f64 - 64.0;
        let dz = c.z as f64 - 64.0;
        70.0 - (dx * dx + dz * dz).sqrt() * 1.6
    })
}

fn config(seed: u64) -> MapConfig {
    let mut config = MapConfig::default().with_seed(seed);
    config.placer.anchor_radius = 10.0;
    config
}

fn run(config: &MapConfig) -> GeneratedLayout {
    generate_layout(island(), config).expect("island has room for the anchor")
}

#[test]
fn test_pinned_seed_reproduces_layout() {
    let first = run(&config(42));
    let second = run(&config(42));

    assert_eq!(first.records, second.records);
    assert_eq!(first.patrol_routes, second.patrol_routes);
    println!("Seed 42: {} objects", first.records.len());
}

#[test]
fn test_anchor_and_revealer_come_first() {
    let layout = run(&config(3));

    let anchor = layout.anchor().unwrap();
    assert_eq!(anchor.object_type, "Carrier");
    assert_eq!(anchor.team, Team::Player);
    let revealer = &layout.records[1];
    assert_eq!(revealer.object_type, "MapRevealer1");
    assert_ne!(revealer.grid_coord(), anchor.grid_coord(), "the revealer goes ashore");
}

#[test]
fn test_flyers_are_assigned_to_the_route() {
    let mut config = config(11);
    config.num_flyers = Some(4);
    config.num_patrol_points = Some(5);
    let layout = run(&config);

    let route = &layout.patrol_routes[0];
    assert_eq!(route.name, PATROL_ROUTE_NAME);
    assert_eq!(route.points.len(), 5);
    assert!(!route.assigned.is_empty());
    for index in &route.assigned {
        let flyer = &layout.records[*index];
        assert_eq!(flyer.object_type, "MediumFlyer");
        assert_eq!(flyer.team, Team::Enemy);
    }
    assert_eq!(route.assigned.len(), layout.records_of("MediumFlyer").count());
}

#[test]
fn test_fixed_counts_are_respected() {
    let mut config = config(5);
    config.num_enemy_structures = Some(0);
    config.num_scrap_piles = Some(0);
    config.num_flyers = Some(0);
    let layout = run(&config);

    assert!(layout.records.iter().all(|r| r.team != Team::Enemy));
    assert!(layout.patrol_routes[0].assigned.is_empty());
}

#[test]
fn test_unpinned_seed_is_reported() {
    let mut config = config(0);
    config.seed = None;
    let layout = run(&config);

    assert_eq!(layout.config.seed, Some(layout.seed));
    assert_eq!(run(&layout.config).records, layout.records, "replaying the reported seed must match");
}

#[test]
fn test_saved_config_replays_the_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maps").join("island.toml");

    let mut original = config(0);
    original.seed = None;
    let layout = run(&original);
    layout.config.save(&path).unwrap();

    let loaded = MapConfig::load(&path).unwrap();
    assert_eq!(loaded, layout.config);
    assert_eq!(run(&loaded).records, layout.records);
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = MapConfig::load(dir.path().join("absent.toml")).unwrap();

    assert_eq!(loaded, MapConfig::default());
}

#[test]
fn test_nothing_in_the_water() {
    let layout = run(&config(17));

    // The anchor floats on the coast at a fixed height.
    for record in layout.records.iter().skip(1) {
        assert!(
            record.position.y >= 0.0,
            "{} at {} placed below sea level: y={}",
            record.object_type,
            record.grid_coord(),
            record.position.y
        );
    }
}

#[test]
fn test_revealer_outside_anchor_disk() {
    for seed in [17, 23, 99] {
        let layout = run(&config(seed));
        let anchor = layout.anchor().unwrap();
        let revealer = layout.records_of("MapRevealer1").next().expect("revealer placed");

        let keep_clear = anchor.required_radius * anchor.required_radius;
        #[allow(clippy::cast_precision_loss)]
        let distance_sq = revealer.grid_coord().distance_squared(anchor.grid_coord()) as f64;
        assert!(
            distance_sq > keep_clear,
            "seed {seed}: revealer at {} inside the anchor disk around {}",
            revealer.grid_coord(),
            anchor.grid_coord()
        );
    }
}
