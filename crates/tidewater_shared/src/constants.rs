//! # Placement Constants
//!
//! Defaults tuned for the 256x256 "large" map template. Every value here can
//! be overridden through the placer configuration; these are the fallbacks.

// =============================================================================
// TERRAIN CLASSIFICATION
// =============================================================================

/// Height at or below which a cell always counts as water.
pub const DEFAULT_LAND_CUTOFF: f64 = -20.0;

/// Width of the coastal band, as a percentage of the larger map dimension.
pub const COAST_RADIUS_PERCENT: u32 = 30;

// =============================================================================
// ANCHOR (CARRIER)
// =============================================================================

/// Object type of the mandatory anchor.
pub const ANCHOR_OBJECT_TYPE: &str = "Carrier";

/// Keep-clear radius of the anchor, in grid cells.
pub const ANCHOR_RADIUS: f64 = 30.0;

/// The anchor floats: its vertical position is fixed, not read from terrain.
pub const ANCHOR_HEIGHT: f64 = 15.0;

// =============================================================================
// OTHER RADII
// =============================================================================

/// Keep-clear radius used for every scenery object.
pub const SCENERY_RADIUS: f64 = 2.0;

/// Search radius for patrol waypoints.
pub const PATROL_POINT_RADIUS: f64 = 1.0;

// =============================================================================
// FILE BOUNDARY
// =============================================================================

/// Horizontal scale from one grid cell to world units (10 x 51.7).
pub const WORLD_SCALE: f64 = 517.0;
