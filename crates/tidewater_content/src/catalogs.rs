//! # Weighted Catalogs
//!
//! The weighted sets zones are populated from. Weights are relative within
//! one catalog: in [`base_all_other`] a wall gun (8) is drawn twice as often
//! as an AA site (4).
//!
//! Every catalog is rebuilt on each call and validated by
//! [`Catalog::builder`]; a bad weight here is a bug and surfaces as an error.

use tidewater_procedural::{Catalog, Placeable};

use crate::error::ContentResult;
use crate::objects::{
    air_prod, alien_aa, blast_tower, com_center, destroyed_copter, destroyed_ground_prod,
    destroyed_store, destroyed_wall, fuel_silo, fuel_tank, green_box, ground_prod, large_prod,
    lightning_gun, oil_pump, power_store, scavenger_debris, scrap_truck, small_box, tank_wrecks,
    wall_gun, weapon_crate,
};

/// Catalogs by name, for config files and tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogId {
    /// Must-have of a pump outpost.
    PumpOutpostPriority,
    /// Everything else a pump outpost may hold.
    PumpOutpostAll,
    /// Must-have structures of an enemy base.
    BasePriority,
    /// Everything else an enemy base may hold.
    BaseAllOther,
    /// Centre pieces of a destroyed base.
    DestroyedBasePriority,
    /// Debris of a destroyed base.
    ScrapDestroyedBase,
    /// Wrecks of a tank and helicopter battle.
    ScrapBattle,
    /// Must-have of a weapon crate site.
    WeaponCratePriority,
    /// Filler of a weapon crate site.
    WeaponCrateOthers,
    /// Fuel tanks and silos.
    ScrapFuelTanks,
}

impl CatalogId {
    /// Every catalog, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::PumpOutpostPriority,
        Self::PumpOutpostAll,
        Self::BasePriority,
        Self::BaseAllOther,
        Self::DestroyedBasePriority,
        Self::ScrapDestroyedBase,
        Self::ScrapBattle,
        Self::WeaponCratePriority,
        Self::WeaponCrateOthers,
        Self::ScrapFuelTanks,
    ];

    /// Snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PumpOutpostPriority => "pump_outpost_priority",
            Self::PumpOutpostAll => "pump_outpost_all",
            Self::BasePriority => "base_priority",
            Self::BaseAllOther => "base_all_other",
            Self::DestroyedBasePriority => "destroyed_base_priority",
            Self::ScrapDestroyedBase => "scrap_destroyed_base",
            Self::ScrapBattle => "scrap_battle",
            Self::WeaponCratePriority => "weapon_crate_priority",
            Self::WeaponCrateOthers => "weapon_crate_others",
            Self::ScrapFuelTanks => "scrap_fuel_tanks",
        }
    }

    /// Looks a catalog up by its snake-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Builds the catalog.
    ///
    /// # Errors
    ///
    /// Only if a built-in weight is invalid.
    pub fn build(self) -> ContentResult<Catalog<Placeable>> {
        match self {
            Self::PumpOutpostPriority => pump_outpost_priority(),
            Self::PumpOutpostAll => pump_outpost_all(),
            Self::BasePriority => base_priority(),
            Self::BaseAllOther => base_all_other(),
            Self::DestroyedBasePriority => destroyed_base_priority(),
            Self::ScrapDestroyedBase => scrap_destroyed_base(),
            Self::ScrapBattle => scrap_battle(),
            Self::WeaponCratePriority => weapon_crate_priority(),
            Self::WeaponCrateOthers => weapon_crate_others(),
            Self::ScrapFuelTanks => scrap_fuel_tanks(),
        }
    }
}

fn build<I, P>(entries: I) -> ContentResult<Catalog<Placeable>>
where
    I: IntoIterator<Item = (P, i64)>,
    P: Into<Placeable>,
{
    let catalog = Catalog::from_weights(entries.into_iter().map(|(item, weight)| (item.into(), weight)))?;
    Ok(catalog)
}

/// Oil pump only.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn pump_outpost_priority() -> ContentResult<Catalog<Placeable>> {
    build([(oil_pump(), 1)])
}

/// Defences around a pump outpost.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn pump_outpost_all() -> ContentResult<Catalog<Placeable>> {
    build([
        (Placeable::from(wall_gun()), 4),
        (Placeable::from(lightning_gun()), 2),
        (Placeable::from(blast_tower()), 3),
        (Placeable::from(alien_aa()), 2),
        (Placeable::from(oil_pump()), 3),
    ])
}

/// Production and command structures.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn base_priority() -> ContentResult<Catalog<Placeable>> {
    build([
        (ground_prod(), 6),
        (air_prod(), 6),
        (large_prod(), 6),
        (com_center(), 1),
        (power_store(), 1),
    ])
}

/// General enemy base filler.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn base_all_other() -> ContentResult<Catalog<Placeable>> {
    build([
        (Placeable::from(wall_gun()), 8),
        (Placeable::from(lightning_gun()), 8),
        (Placeable::from(blast_tower()), 8),
        (Placeable::from(alien_aa()), 4),
        (Placeable::from(ground_prod()), 2),
        (Placeable::from(air_prod()), 2),
        (Placeable::from(large_prod()), 2),
        (Placeable::from(oil_pump()), 3),
        (Placeable::from(com_center()), 2),
    ])
}

/// Wrecked large buildings.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn destroyed_base_priority() -> ContentResult<Catalog<Placeable>> {
    build([(destroyed_ground_prod(), 5), (destroyed_store(), 1), (destroyed_wall(), 1)])
}

/// Debris around a destroyed base.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn scrap_destroyed_base() -> ContentResult<Catalog<Placeable>> {
    let [bent_pipe, hole_pipe, bent_back_gun, broken_gun] = scavenger_debris();
    let [tank, tank1, tank2] = tank_wrecks();
    build([
        (bent_pipe, 5),
        (hole_pipe, 5),
        (bent_back_gun, 1),
        (broken_gun, 1),
        (destroyed_copter(), 1),
        (tank, 1),
        (tank1, 1),
        (tank2, 1),
        (destroyed_store(), 1),
    ])
}

/// Tank and helicopter wrecks, equally likely.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn scrap_battle() -> ContentResult<Catalog<Placeable>> {
    let [tank, tank1, tank2] = tank_wrecks();
    build([(tank, 1), (tank1, 1), (tank2, 1), (destroyed_copter(), 1)])
}

/// The weapon crate itself.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn weapon_crate_priority() -> ContentResult<Catalog<Placeable>> {
    build([(weapon_crate(), 1)])
}

/// Boxes and a truck around the weapon crate.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn weapon_crate_others() -> ContentResult<Catalog<Placeable>> {
    build([(small_box(), 4), (green_box(), 8), (scrap_truck(), 1)])
}

/// Fuel tanks and silos.
///
/// # Errors
///
/// Only if a built-in weight is invalid.
pub fn scrap_fuel_tanks() -> ContentResult<Catalog<Placeable>> {
    build([(fuel_tank(), 1), (fuel_silo(), 1)])
}
