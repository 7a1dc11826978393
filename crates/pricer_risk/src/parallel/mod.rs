//! Rayon-based parallelisation utilities.
//!
//! Sweeps evaluate independent samples; these helpers decide whether to fan
//! out across the rayon pool and always return results in input order.

use rayon::prelude::*;

/// Minimum number of items a rayon task processes.
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Default sample count at which sweeps switch to parallel evaluation.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items per rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Maps `items` sequentially or on the rayon pool depending on their count.
    ///
    /// Output order always matches input order.
    pub fn map<T, R, F>(&self, items: &[T], mapper: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.should_parallelize(items.len()) {
            items
                .par_iter()
                .with_min_len(self.batch_size.max(1))
                .map(mapper)
                .collect()
        } else {
            items.iter().map(mapper).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_config() {
        let config = ParallelConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(!config.should_parallelize(10));
        assert!(config.should_parallelize(64));

        assert_eq!(ParallelConfig::new(0, 5).batch_size, 1);
        assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
    }

    #[test]
    fn test_map_preserves_order_both_paths() {
        let items: Vec<f64> = (0..1000).map(|i| i as f64 * 0.5).collect();
        let square = |x: &f64| x * x;

        let parallel = ParallelConfig::new(8, 1).map(&items, square);
        let sequential = ParallelConfig::sequential().map(&items, square);

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[999], 499.5 * 499.5);
    }

    #[test]
    fn test_map_empty_input() {
        let items: Vec<u8> = Vec::new();
        assert!(ParallelConfig::new(1, 0).map(&items, |&x| x).is_empty());
    }
}
