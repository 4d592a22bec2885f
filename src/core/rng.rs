//! Deterministic random number generation for dealing boards.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Uniform**: Fisher–Yates shuffle and partial Fisher–Yates sampling
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut cards = vec![1, 1, 2, 2, 3, 3];
//! rng.shuffle(&mut cards);
//!
//! let mut sorted = cards.clone();
//! sorted.sort();
//! assert_eq!(sorted, vec![1, 1, 2, 2, 3, 3]);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream used for token selection and board shuffling.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniform index in `0..=max`.
    pub fn index_inclusive(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place (Fisher–Yates).
    ///
    /// For `i` from the last index down to 1, picks `j` uniformly in `[0, i]`
    /// and swaps `i` and `j`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_inclusive(i);
            slice.swap(i, j);
        }
    }

    /// Pick `count` distinct items uniformly at random.
    ///
    /// Runs a partial Fisher–Yates over a copy of `items`, so each
    /// `count`-subset is equally likely. Returns `None` if `count` exceeds
    /// the number of items.
    #[must_use]
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Option<Vec<T>> {
        if count > items.len() {
            return None;
        }

        let mut pool = items.to_vec();
        let len = pool.len();
        for i in 0..count {
            let j = i + self.index_inclusive(len - 1 - i);
            pool.swap(i, j);
        }
        pool.truncate(count);
        Some(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index_inclusive(1000), rng2.index_inclusive(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index_inclusive(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index_inclusive(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        for max in 0..20 {
            for _ in 0..50 {
                assert!(rng.index_inclusive(max) <= max);
            }
        }
        assert_eq!(rng.index_inclusive(0), 0);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(42);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_ordering() {
        // 3! = 6 orderings; all should show up over enough runs.
        let mut rng = GameRng::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut data = [0, 1, 2];
            rng.shuffle(&mut data);
            seen.insert(data);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(42);
        let items: Vec<u32> = (0..54).collect();

        let picked = rng.sample(&items, 18).unwrap();
        assert_eq!(picked.len(), 18);

        let mut unique = picked.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 18);
        assert!(picked.iter().all(|p| items.contains(p)));
    }

    #[test]
    fn test_sample_too_many() {
        let mut rng = GameRng::new(42);
        assert!(rng.sample(&[1, 2, 3], 4).is_none());
        assert_eq!(rng.sample(&[1, 2, 3], 0), Some(vec![]));
    }
}
