//! # Deterministic Random Source
//!
//! Every random decision of a generation run flows through exactly one
//! [`RandomSource`]. There is no global generator: the source is owned by the
//! object placer and lent out by `&mut`, so two call sites can never
//! interleave draws.
//!
//! ## Determinism Guarantee
//!
//! Given the same seed and the same sequence of calls, every result is
//! identical. The seed is always retrievable, including when it was chosen
//! from entropy, so a run can be persisted and replayed.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::Catalog;
use crate::error::{PlacementError, PlacementResult};

/// Seeded pseudo-random generator for one generation run.
#[derive(Clone, Debug)]
pub struct RandomSource {
    /// Seed this source was created with.
    seed: u64,
    /// The generator itself.
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source with a seed drawn from OS entropy.
    ///
    /// The chosen seed is available through [`RandomSource::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Returns the seed this source was created with.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// `PlacementError::Range` if `min >= max`.
    pub fn uniform_int(&mut self, min: i64, max: i64) -> PlacementResult<i64> {
        if min >= max {
            return Err(PlacementError::Range { min, max });
        }
        Ok(self.rng.gen_range(min..max))
    }

    /// Uniform index in `[0, len)`.
    ///
    /// # Errors
    ///
    /// `PlacementError::EmptyInput` if `len == 0`.
    pub fn uniform_index(&mut self, len: usize) -> PlacementResult<usize> {
        if len == 0 {
            return Err(PlacementError::EmptyInput("index range"));
        }
        Ok(self.rng.gen_range(0..len))
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// `PlacementError::EmptyInput` on an empty slice.
    pub fn choose_one<'a, T>(&mut self, items: &'a [T]) -> PlacementResult<&'a T> {
        if items.is_empty() {
            return Err(PlacementError::EmptyInput("sequence"));
        }
        let index = self.rng.gen_range(0..items.len());
        Ok(&items[index])
    }

    /// Picks a random sublist of distinct elements.
    ///
    /// `min_n` is a hard floor: when the input has `min_n` elements or fewer,
    /// the first `min_n` (that is, all of them) are returned in order and no
    /// randomness is consumed. Otherwise the size is drawn from the half-open
    /// range `[min_n, min(max_n, len))`: the upper bound is exclusive, as in
    /// the generator existing seeds were made with, so `max_n` itself is
    /// never picked. An empty range collapses to `min_n`. Elements
    /// are sampled without replacement.
    pub fn choose_sublist<T: Clone>(&mut self, items: &[T], min_n: usize, max_n: usize) -> Vec<T> {
        let len = items.len();
        if len <= min_n {
            return items[..len.min(min_n)].to_vec();
        }

        let upper = max_n.min(len);
        let amount = if min_n >= upper {
            min_n.min(len)
        } else {
            self.rng.gen_range(min_n..upper)
        };

        index::sample(&mut self.rng, len, amount)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    /// Picks one catalog item with probability proportional to its weight.
    ///
    /// # Errors
    ///
    /// `PlacementError::EmptyInput` on an empty catalog.
    pub fn weighted_choose<'a, K>(&mut self, catalog: &'a Catalog<K>) -> PlacementResult<&'a K> {
        if catalog.total_weight() == 0 {
            return Err(PlacementError::EmptyInput("catalog"));
        }
        let roll = self.rng.gen_range(0..catalog.total_weight());
        catalog
            .pick(roll)
            .ok_or(PlacementError::EmptyInput("catalog"))
    }
}
