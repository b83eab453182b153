//! # Object Containers
//!
//! Every object type the generator places, with its team, keep-clear radius
//! and height offset. Radii are in grid cells; offsets lift models whose
//! origin is not at their base.

use tidewater_procedural::{ObjectContainer, Template};
use tidewater_shared::{Team, Vec3};

// ---------------------------------------------------------------------------
// Player side and patrols
// ---------------------------------------------------------------------------

/// Reveals the map around the anchor at mission start.
#[must_use]
pub fn map_revealer() -> ObjectContainer {
    ObjectContainer::new("MapRevealer1", Team::Player, 1.0)
}

/// Hostile flyer that follows a patrol route. Spawned in the air.
#[must_use]
pub fn medium_flyer() -> ObjectContainer {
    ObjectContainer::new("MediumFlyer", Team::Enemy, 4.0).with_y_offset(15.0)
}

// ---------------------------------------------------------------------------
// Enemy base structures
// ---------------------------------------------------------------------------

/// Tower with a wall laser.
#[must_use]
pub fn wall_gun() -> ObjectContainer {
    ObjectContainer::new("AlienTower", Team::Enemy, 2.0).with_attachment("WallLaser")
}

/// Tower with a lightning gun.
#[must_use]
pub fn lightning_gun() -> ObjectContainer {
    ObjectContainer::new("AlienTower", Team::Enemy, 2.0).with_attachment("LightningGun")
}

/// Blast tower.
#[must_use]
pub fn blast_tower() -> ObjectContainer {
    ObjectContainer::new("BlastTower", Team::Enemy, 2.0).with_y_offset(2.0)
}

/// Oil pump, the centre of a pump outpost.
#[must_use]
pub fn oil_pump() -> ObjectContainer {
    ObjectContainer::new("ALIENPUMP", Team::Enemy, 2.0)
}

/// Energy store.
#[must_use]
pub fn power_store() -> ObjectContainer {
    ObjectContainer::new("alienpowerstore", Team::Enemy, 2.0).with_y_offset(3.0)
}

/// Ground unit factory.
#[must_use]
pub fn ground_prod() -> ObjectContainer {
    ObjectContainer::new("ALIENGROUNDPROD", Team::Enemy, 5.0)
}

/// Large unit factory.
#[must_use]
pub fn large_prod() -> ObjectContainer {
    ObjectContainer::new("ALIENLARGEPROD", Team::Enemy, 5.0)
}

/// Air unit factory.
#[must_use]
pub fn air_prod() -> ObjectContainer {
    ObjectContainer::new("AlienProdTower", Team::Enemy, 3.0)
}

/// Command centre.
#[must_use]
pub fn com_center() -> ObjectContainer {
    ObjectContainer::new("ALIENCOMCENTER", Team::Enemy, 5.0)
}

/// Spy base with an AA gun mounted on top.
///
/// The gun offset was measured from a shipped level.
#[must_use]
pub fn alien_aa() -> Template {
    Template::new(ObjectContainer::new("Alienspybase", Team::Enemy, 2.0)).with_part(
        ObjectContainer::new("Alienackackgun", Team::Enemy, 2.0).with_template_offset(Vec3::new(
            0.008_398_056_640_626_095,
            18.072_725_546_874_995,
            0.456_558_226_562_492_56,
        )),
    )
}

// ---------------------------------------------------------------------------
// Scrap
// ---------------------------------------------------------------------------

fn scrap(object_type: &str, y_offset: f64) -> ObjectContainer {
    ObjectContainer::new(object_type, Team::Neutral, 1.0).with_y_offset(y_offset)
}

/// Crashed helicopter.
#[must_use]
pub fn destroyed_copter() -> ObjectContainer {
    scrap("Smashedcopter", 2.0)
}

/// The three tank wreck variants.
#[must_use]
pub fn tank_wrecks() -> [ObjectContainer; 3] {
    [scrap("Tankwreck", 0.0), scrap("tankwreck1", 0.0), scrap("tankwreck2", 0.0)]
}

/// Fuel tank.
#[must_use]
pub fn fuel_tank() -> ObjectContainer {
    scrap("l2fueltank", 1.752)
}

/// Fuel silo.
#[must_use]
pub fn fuel_silo() -> ObjectContainer {
    scrap("l2silo", 5.5)
}

/// Pipe and gun debris of a destroyed base.
#[must_use]
pub fn scavenger_debris() -> [ObjectContainer; 4] {
    [
        scrap("l1scavbentpipe", 2.0),
        scrap("l1scavholepipe", 2.0),
        scrap("l1scavbentbackgun", 2.0),
        scrap("l1scavgunbroken02", 2.0),
    ]
}

/// Wrecked factory.
#[must_use]
pub fn destroyed_ground_prod() -> ObjectContainer {
    ObjectContainer::new("Smashedgroundprod", Team::Neutral, 3.0).with_y_offset(2.0)
}

/// Wrecked store.
#[must_use]
pub fn destroyed_store() -> ObjectContainer {
    scrap("Smashedstore", 2.0)
}

/// Wrecked wall.
#[must_use]
pub fn destroyed_wall() -> ObjectContainer {
    scrap("Smashedwall", 2.0)
}

// ---------------------------------------------------------------------------
// Weapon crate site
// ---------------------------------------------------------------------------

/// The crate that grants a weapon when collected.
#[must_use]
pub fn weapon_crate() -> ObjectContainer {
    scrap("recharge_crate", 0.0)
}

/// Small box.
#[must_use]
pub fn small_box() -> ObjectContainer {
    scrap("l6box", 0.0)
}

/// Green crate.
#[must_use]
pub fn green_box() -> ObjectContainer {
    scrap("crate_green", 0.0)
}

/// Abandoned truck.
#[must_use]
pub fn scrap_truck() -> ObjectContainer {
    scrap("l3truck", 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_container_is_valid() {
        let mut all = vec![
            map_revealer(),
            medium_flyer(),
            wall_gun(),
            lightning_gun(),
            blast_tower(),
            oil_pump(),
            power_store(),
            ground_prod(),
            large_prod(),
            air_prod(),
            com_center(),
            destroyed_copter(),
            fuel_tank(),
            fuel_silo(),
            destroyed_ground_prod(),
            destroyed_store(),
            destroyed_wall(),
            weapon_crate(),
            small_box(),
            green_box(),
            scrap_truck(),
        ];
        all.extend(tank_wrecks());
        all.extend(scavenger_debris());
        all.extend(alien_aa().parts().iter().cloned());

        for container in &all {
            assert!(container.validate().is_ok(), "{} has an invalid radius", container.object_type);
        }
    }

    #[test]
    fn test_towers_share_a_body() {
        assert_eq!(wall_gun().object_type, lightning_gun().object_type);
        assert_ne!(wall_gun().attachment, lightning_gun().attachment);
    }

    #[test]
    fn test_scrap_is_neutral() {
        for wreck in tank_wrecks() {
            assert_eq!(wreck.team, Team::Neutral);
        }
        assert_eq!(destroyed_ground_prod().radius, 3.0);
    }

    #[test]
    fn test_alien_aa_gun_sits_on_top() {
        let template = alien_aa();
        let gun = &template.secondaries()[0];

        assert_eq!(template.primary().object_type, "Alienspybase");
        assert!(gun.template_offset.y > 18.0);
    }
}
