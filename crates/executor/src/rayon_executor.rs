//! Rayon-based parallel executor.

use crate::Executor;
use log::debug;
use rayon::prelude::*;

/// A parallel executor using rayon's global work-stealing thread pool.
///
/// To limit the worker count, configure rayon before the first executor is
/// created:
///
/// ```ignore
/// rayon::ThreadPoolBuilder::new()
///     .num_threads(4)
///     .build_global()?;
/// let executor = RayonExecutor::new();
/// ```
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Cached thread count for reporting via `parallelism()`.
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        let num_threads = rayon::current_num_threads();
        debug!("RayonExecutor using {} thread(s)", num_threads);
        Self { num_threads }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        // Indexed parallel collect keeps the input order.
        items.into_par_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_results_follow_input_order() {
        let executor = RayonExecutor::new();
        let items: Vec<u32> = (1..=64).collect();
        let results = executor.execute_all(items.clone(), |x| x * 3);
        let expected: Vec<u32> = items.iter().map(|x| x * 3).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_every_item_runs_once() {
        let executor = RayonExecutor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let items: Vec<usize> = (0..100).collect();

        let _ = executor.execute_all(items, {
            let counter = counter.clone();
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn test_fallible_keeps_positions() {
        let executor = RayonExecutor::new();
        let results: Vec<Result<u32, &str>> =
            executor.execute_all_fallible(vec![4, 0, 2], |x| if x == 0 { Err("zero") } else { Ok(8 / x) });
        assert_eq!(results, vec![Ok(2), Err("zero"), Ok(4)]);
    }
}
