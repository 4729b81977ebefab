//! Executors for batch work such as adapting one template to every format it
//! supports.
//!
//! ## Available Executors
//!
//! - [`SyncExecutor`]: Sequential execution on the calling thread
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)
//!
//! Every executor returns results in the order of its input items, so callers
//! can zip results back onto the work list.

use std::fmt::Debug;

#[cfg(feature = "rayon")]
mod rayon_executor;
mod sync;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;
pub use sync::SyncExecutor;

/// Runs a batch of independent work items.
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. Results keep the input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Like [`execute_all`](Executor::execute_all) for operations that may
    /// fail. One failure does not stop the rest of the batch.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// 1 for sequential executors, the worker count otherwise.
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A type-erased executor that wraps concrete executor implementations.
///
/// Since the `Executor` trait has generic methods, it cannot be used as a trait object
/// (`dyn Executor`). This enum holds the concrete executor types and delegates to them.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    /// Sequential executor (no parallelism)
    Sync(SyncExecutor),

    /// Rayon work-stealing thread pool executor
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    pub fn sequential() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formats() -> Vec<&'static str> {
        vec!["1080x1080", "1920x1080", "1080x1920", "728x90", "300x250"]
    }

    #[test]
    fn test_default_executor_keeps_input_order() {
        let executor = ExecutorImpl::default();
        let widths = executor.execute_all(formats(), |f| f.split('x').next().map(str::len));
        assert_eq!(widths, vec![Some(4), Some(4), Some(4), Some(3), Some(3)]);
    }

    #[test]
    fn test_sequential_and_default_agree() {
        let upper = |f: &'static str| f.to_uppercase();
        let a = ExecutorImpl::sequential().execute_all(formats(), upper);
        let b = ExecutorImpl::default().execute_all(formats(), upper);
        assert_eq!(a, b);
    }

    #[test]
    fn test_name_and_parallelism() {
        let exec = ExecutorImpl::sequential();
        assert_eq!(exec.name(), "SyncExecutor");
        assert_eq!(exec.parallelism(), 1);
        assert!(ExecutorImpl::default().parallelism() >= 1);
    }
}
