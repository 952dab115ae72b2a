//! Bounded fan-out of per-cluster work onto a dedicated rayon pool.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use vibes_core::errors::{ConfigError, VibesResult};

/// Worker pool for generation calls, built once per engine.
pub struct GenerationPool {
    pool: ThreadPool,
}

impl GenerationPool {
    pub fn new(threads: usize) -> VibesResult<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("vibes-gen-{i}"))
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "pipeline.max_parallel_generations".to_string(),
                message: format!("cannot build generation pool: {e}"),
            })?;
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `f` over `items` in parallel. Results keep input order whatever
    /// the completion order.
    pub fn map_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &T) -> R + Sync + Send,
    {
        self.pool.install(|| {
            items
                .par_iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn order_survives_uneven_latency() {
        let pool = GenerationPool::new(4).unwrap();
        let items: Vec<u64> = (0..16).collect();
        let out = pool.map_ordered(&items, |i, &x| {
            thread::sleep(Duration::from_millis((16 - x) * 2));
            (i, x * 10)
        });
        let expected: Vec<(usize, u64)> = (0..16).map(|x| (x as usize, x * 10)).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn pool_has_requested_threads() {
        assert_eq!(GenerationPool::new(3).unwrap().threads(), 3);
    }

    #[test]
    fn empty_input() {
        let pool = GenerationPool::new(2).unwrap();
        let out: Vec<u8> = pool.map_ordered(&Vec::<u8>::new(), |_, &x| x);
        assert!(out.is_empty());
    }
}
