//! # Tidewater Shared
//!
//! Common types used by the placement core, the content tables and the
//! generation pipeline.
//!
//! ## Coordinate Spaces
//!
//! Everything inside the placement engine is expressed in grid units
//! (`GridCoord`, and `Vec3` whose x/z are grid cells). The only way out to
//! the file/world space is [`math::grid_to_world`].

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;
pub mod team;

pub use constants::{
    ANCHOR_HEIGHT, ANCHOR_OBJECT_TYPE, ANCHOR_RADIUS, COAST_RADIUS_PERCENT, DEFAULT_LAND_CUTOFF,
    PATROL_POINT_RADIUS, SCENERY_RADIUS, WORLD_SCALE,
};
pub use math::{grid_to_world, GridCoord, Vec3};
pub use team::Team;
