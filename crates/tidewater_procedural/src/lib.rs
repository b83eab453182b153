//! # Tidewater Placement Engine
//!
//! Deterministic object placement on an island map.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed and same calls always produce the same map
//! 2. **Non-overlapping**: Every placement carves its keep-clear disk before
//!    the next search
//! 3. **Terrain-aware**: Objects never end up under water or off the map
//!
//! ## Core Components
//!
//! - `RandomSource`: the one seeded generator of a run
//! - `ClassificationMasks`: land / water / coast, derived once from terrain
//! - `transition_mask`: two-cell-thick boundary extraction
//! - `OccupancyMask`: free cells, only ever narrowed
//! - `LocationFinder`: radius-aware random location search
//! - `ObjectPlacer`: anchor, land objects, scenery, templates, patrol points
//! - `Catalog`: validated weighted sets for zone population
//!
//! ## Example
//!
//! ```rust,ignore
//! use tidewater_procedural::{Heightmap, ObjectPlacer, RandomSource};
//!
//! let terrain = Heightmap::from_fn(256, 256, |c| island_height(c));
//! let mut placer = ObjectPlacer::with_defaults(terrain, RandomSource::new(42));
//!
//! let anchor = placer.place_anchor()?;
//! let scenery = placer.place_scenery(&[("palm1", 80), ("plant1", 30)]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod boundary;
pub mod catalog;
pub mod error;
pub mod grid;
pub mod location;
pub mod masks;
pub mod occupancy;
pub mod placer;
pub mod random;
pub mod record;
pub mod shared;
pub mod template;
pub mod terrain;

pub use boundary::transition_mask;
pub use catalog::{Catalog, CatalogBuilder, CatalogEntry};
pub use error::{PlacementError, PlacementResult};
pub use grid::{clearance_radius, Grid, Mask};
pub use location::LocationFinder;
pub use masks::{coast_mask, land_mask, water_mask, ClassificationMasks, LocationCategory};
pub use occupancy::OccupancyMask;
pub use placer::{ObjectPlacer, PlacerConfig};
pub use random::RandomSource;
pub use record::PlacementRecord;
pub use shared::SharedPlacer;
pub use template::{ObjectContainer, Placeable, Template};
pub use terrain::{HeightOracle, Heightmap};
