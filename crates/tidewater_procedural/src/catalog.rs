//! # Weighted Catalogs
//!
//! A catalog maps items to positive integer weights. Weights are relative:
//! `{A: 1, B: 3}` means B is drawn three times as often as A. Nothing needs
//! to be normalised.
//!
//! Catalogs are validated once, at construction, by [`CatalogBuilder`]:
//!
//! ```rust,ignore
//! let catalog = Catalog::builder()
//!     .add("wall_gun", 4)
//!     .add("blast_tower", 3)
//!     .build()?;
//!
//! let picked = random.weighted_choose(&catalog)?;
//! ```
//!
//! Entry order is insertion order, so the same seed always maps to the same
//! item.

use crate::error::{PlacementError, PlacementResult};

/// One weighted entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry<K> {
    /// The item.
    pub item: K,
    /// Relative selection weight (always >= 1).
    pub weight: u32,
}

/// A validated, non-empty weighted set.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog<K> {
    entries: Vec<CatalogEntry<K>>,
    /// Sum of all weights (pre-calculated).
    total_weight: u64,
}

impl<K> Catalog<K> {
    /// Starts building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder<K> {
        CatalogBuilder::new()
    }

    /// Builds a catalog from `(item, weight)` pairs.
    ///
    /// # Errors
    ///
    /// `InvalidWeight` if any weight is below 1, `EmptyCatalog` if there are
    /// no pairs.
    pub fn from_weights<I>(pairs: I) -> PlacementResult<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
    {
        pairs
            .into_iter()
            .fold(CatalogBuilder::new(), |builder, (item, weight)| builder.add(item, weight))
            .build()
    }

    /// Sum of all weights.
    #[inline]
    #[must_use]
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built catalog; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry<K>] {
        &self.entries
    }

    /// Iterates `(item, weight)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.entries.iter().map(|entry| (&entry.item, entry.weight))
    }

    /// Maps a roll in `[0, total_weight)` to the entry whose cumulative weight
    /// range contains it.
    #[must_use]
    pub fn pick(&self, roll: u64) -> Option<&K> {
        let mut cumulative = 0u64;
        for entry in &self.entries {
            cumulative += u64::from(entry.weight);
            if roll < cumulative {
                return Some(&entry.item);
            }
        }
        None
    }

    /// Transforms every item, keeping weights and order.
    #[must_use]
    pub fn map<U, F: FnMut(K) -> U>(self, mut f: F) -> Catalog<U> {
        Catalog {
            entries: self
                .entries
                .into_iter()
                .map(|entry| CatalogEntry { item: f(entry.item), weight: entry.weight })
                .collect(),
            total_weight: self.total_weight,
        }
    }
}

/// Collects entries, validates them on [`CatalogBuilder::build`].
#[derive(Debug)]
pub struct CatalogBuilder<K> {
    pending: Vec<(K, i64)>,
}

impl<K> CatalogBuilder<K> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Adds an item with a relative weight. Validation is deferred to `build`.
    #[must_use]
    pub fn add(mut self, item: K, weight: i64) -> Self {
        self.pending.push((item, weight));
        self
    }

    /// Validates and builds the catalog.
    ///
    /// # Errors
    ///
    /// `InvalidWeight` for the first weight outside `1..=u32::MAX`,
    /// `EmptyCatalog` if nothing was added.
    pub fn build(self) -> PlacementResult<Catalog<K>> {
        if self.pending.is_empty() {
            return Err(PlacementError::EmptyCatalog);
        }

        let mut entries = Vec::with_capacity(self.pending.len());
        let mut total_weight = 0u64;
        for (item, weight) in self.pending {
            let valid = u32::try_from(weight)
                .ok()
                .filter(|w| *w >= 1)
                .ok_or(PlacementError::InvalidWeight { weight })?;
            total_weight += u64::from(valid);
            entries.push(CatalogEntry { item, weight: valid });
        }

        Ok(Catalog { entries, total_weight })
    }
}

impl<K> Default for CatalogBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_weight() {
        let catalog = Catalog::from_weights([("a", 1), ("b", 3), ("c", 6)]).unwrap();

        assert_eq!(catalog.total_weight(), 10);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let result = Catalog::builder().add("a", 2).add("b", 0).build();
        assert_eq!(result, Err(PlacementError::InvalidWeight { weight: 0 }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Catalog::from_weights([("a", -4)]);
        assert_eq!(result, Err(PlacementError::InvalidWeight { weight: -4 }));
    }

    #[test]
    fn test_empty_rejected() {
        let result: PlacementResult<Catalog<&str>> = Catalog::builder().build();
        assert_eq!(result, Err(PlacementError::EmptyCatalog));
    }

    #[test]
    fn test_pick_boundaries() {
        let catalog = Catalog::from_weights([("a", 1), ("b", 3)]).unwrap();

        assert_eq!(catalog.pick(0), Some(&"a"));
        assert_eq!(catalog.pick(1), Some(&"b"));
        assert_eq!(catalog.pick(3), Some(&"b"));
        assert_eq!(catalog.pick(4), None);
    }

    #[test]
    fn test_insertion_order_kept() {
        let catalog = Catalog::from_weights([("z", 1), ("a", 1), ("m", 1)]).unwrap();
        let order: Vec<_> = catalog.iter().map(|(item, _)| *item).collect();

        assert_eq!(order, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_map_keeps_weights() {
        let catalog = Catalog::from_weights([("a", 2), ("bb", 5)]).unwrap();
        let lengths = catalog.map(str::len);

        assert_eq!(lengths.total_weight(), 7);
        assert_eq!(lengths.entries()[1], CatalogEntry { item: 2, weight: 5 });
    }
}
