//! # Tidewater
//!
//! Deterministic island layout generation, integrating all crates.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          TIDEWATER                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────────┐        ┌──────────────────┐            │
//! │  │     content      │───────>│    procedural    │            │
//! │  │                  │        │                  │            │
//! │  │  • Containers    │        │  • RandomSource  │            │
//! │  │  • Templates     │        │  • Masks         │            │
//! │  │  • Catalogs      │        │  • Occupancy     │            │
//! │  │  • Scenery       │        │  • ObjectPlacer  │            │
//! │  └────────┬─────────┘        └────────┬─────────┘            │
//! │           │                           │                      │
//! │           │   ┌───────────────────┐   │                      │
//! │           └──>│   generation      │<──┘                      │
//! │               │  • MapConfig      │                          │
//! │               │  • generate_layout│                          │
//! │               └───────────────────┘                          │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: persisted map settings
//! - `generation`: the end-to-end pipeline
//! - `error`: run-level errors

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod generation;

// Re-export the workspace crates
pub use tidewater_content as content;
pub use tidewater_procedural as procedural;
pub use tidewater_shared as shared;

// Re-export commonly used types
pub use config::{MapConfig, CONFIG_VERSION};
pub use error::{GenerationError, GenerationResult};
pub use generation::{generate_layout, GeneratedLayout, PatrolRoute, PATROL_ROUTE_NAME};
