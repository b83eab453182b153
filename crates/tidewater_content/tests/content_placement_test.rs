//! # Content Placement Tests
//!
//! Places the built-in content with the real placer and checks that what
//! comes back matches the catalogs it was drawn from.

use tidewater_content::{catalogs, default_scenery_count, objects, CatalogFile, CatalogId, DEFAULT_SCENERY};
use tidewater_procedural::{Heightmap, ObjectPlacer, RandomSource};
use tidewater_shared::Team;

fn plateau(size: usize) -> Heightmap {
    Heightmap::from_fn(size, size, |c| {
        let inside = c.x >= 8 && c.z >= 8 && c.x < size - 8 && c.z < size - 8;
        if inside {
            30.0
        } else {
            -40.0
        }
    })
}

#[test]
fn test_default_scenery_on_a_large_map() {
    let mut placer = ObjectPlacer::with_defaults(plateau(128), RandomSource::new(42));
    let placed = placer.place_scenery(DEFAULT_SCENERY);

    println!("Placed {} of {} scenery objects", placed.len(), default_scenery_count());
    assert!(placed.len() > default_scenery_count() / 2, "most scenery should fit on 112x112 land");
    assert!(placed.iter().all(|r| r.team == Team::Neutral));
}

#[test]
fn test_enemy_filler_draws_are_enemy() {
    let catalog = catalogs::base_all_other().unwrap();
    let mut placer = ObjectPlacer::with_defaults(plateau(96), RandomSource::new(5));

    let mut placed = Vec::new();
    for _ in 0..12 {
        placed.extend(placer.place_choice_on_land(&catalog, 0.0).unwrap());
    }

    assert!(!placed.is_empty());
    assert!(placed.iter().all(|r| r.team == Team::Enemy), "base filler must be hostile");
}

#[test]
fn test_alien_aa_gun_rides_on_its_base() {
    let mut placer = ObjectPlacer::with_defaults(plateau(32), RandomSource::new(8));
    let records = placer.place_template_on_land(&objects::alien_aa(), 0.0).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].object_type, "Alienspybase");
    assert!(records[1].position.y > records[0].position.y + 18.0);
    assert_eq!(records[0].grid_coord(), records[1].grid_coord());
}

#[test]
fn test_every_named_catalog_places() {
    for id in CatalogId::ALL {
        let catalog = id.build().unwrap();
        let mut placer = ObjectPlacer::with_defaults(plateau(48), RandomSource::new(1));

        let placed = placer.place_choice_on_land(&catalog, 0.0).unwrap();
        assert!(!placed.is_empty(), "{} placed nothing on open land", id.name());
    }
}

#[test]
fn test_file_catalog_places() {
    let file = CatalogFile::from_toml_str(
        r#"
        name = "crates"
        [[entries]]
        weight = 2
        parts = [{ object_type = "crate_green", radius = 1.0 }]
        "#,
    )
    .unwrap();
    let mut placer = ObjectPlacer::with_defaults(plateau(24), RandomSource::new(3));

    let placed = placer.place_choice_on_land(&file.catalog, 90.0).unwrap();
    assert_eq!(placed[0].object_type, "crate_green");
    assert!((placed[0].rotation - 90.0).abs() < f64::EPSILON);
}
