//! # Shared Placer
//!
//! A cloneable handle for callers that place from several threads. Every
//! operation holds the lock for its whole search-then-mark sequence, so two
//! callers can never observe the same free cell.

use std::sync::Arc;

use parking_lot::Mutex;
use tidewater_shared::{GridCoord, Team};

use crate::error::PlacementResult;
use crate::placer::ObjectPlacer;
use crate::record::PlacementRecord;
use crate::template::ObjectContainer;
use crate::terrain::HeightOracle;

/// Mutex-guarded [`ObjectPlacer`].
#[derive(Debug)]
pub struct SharedPlacer<H> {
    inner: Arc<Mutex<ObjectPlacer<H>>>,
}

impl<H> Clone for SharedPlacer<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: HeightOracle> SharedPlacer<H> {
    /// Wraps a placer.
    #[must_use]
    pub fn new(placer: ObjectPlacer<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(placer)),
        }
    }

    /// Runs `f` with exclusive access to the placer.
    pub fn with<R>(&self, f: impl FnOnce(&mut ObjectPlacer<H>) -> R) -> R {
        let mut placer = self.inner.lock();
        f(&mut placer)
    }

    /// See [`ObjectPlacer::place_anchor`].
    ///
    /// # Errors
    ///
    /// As the wrapped operation.
    pub fn place_anchor(&self) -> PlacementResult<PlacementRecord> {
        self.with(ObjectPlacer::place_anchor)
    }

    /// See [`ObjectPlacer::place_on_land_random`].
    pub fn place_on_land_random(
        &self,
        object_type: &str,
        radius: f64,
        y_offset: f64,
        rotation: f64,
        team: Team,
    ) -> Option<PlacementRecord> {
        self.with(|p| p.place_on_land_random(object_type, radius, y_offset, rotation, team))
    }

    /// See [`ObjectPlacer::place_container_on_land`].
    pub fn place_container_on_land(&self, container: &ObjectContainer, rotation: f64) -> Option<PlacementRecord> {
        self.with(|p| p.place_container_on_land(container, rotation))
    }

    /// See [`ObjectPlacer::create_patrol_points`].
    pub fn create_patrol_points(&self, n: usize) -> Vec<GridCoord> {
        self.with(|p| p.create_patrol_points(n))
    }

    /// Free cells left.
    pub fn free_count(&self) -> usize {
        self.inner.lock().occupancy().free_count()
    }

    /// Recovers the placer if this is the last handle.
    ///
    /// # Errors
    ///
    /// Gives the handle back while other clones are alive.
    pub fn into_inner(self) -> Result<ObjectPlacer<H>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
