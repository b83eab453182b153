//! # Tidewater Content
//!
//! The objects a Tidewater map is populated with.
//!
//! ## Design Principles
//!
//! 1. **Data, not logic** - placement rules live in `tidewater_procedural`
//! 2. **Validated catalogs** - every weighted set goes through `Catalog::builder`
//! 3. **External configuration** - custom catalogs load from TOML files
//!
//! ## Example
//!
//! ```rust,ignore
//! use tidewater_content::{catalogs, DEFAULT_SCENERY};
//!
//! placer.place_scenery(DEFAULT_SCENERY);
//!
//! let defences = catalogs::base_all_other()?;
//! let placed = placer.place_choice_on_land(&defences, 0.0)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog_file;
pub mod catalogs;
pub mod error;
pub mod objects;
pub mod scenery;

pub use catalog_file::CatalogFile;
pub use catalogs::CatalogId;
pub use error::{ContentError, ContentResult};
pub use scenery::{default_scenery_count, DEFAULT_SCENERY};
