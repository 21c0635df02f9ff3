//! Rebuild-and-swap handle over an immutable [`Index`].
//!
//! Readers take an `Arc` snapshot and query it without holding any lock.
//! A rebuild constructs the new index off-lock and only takes the write lock
//! for the pointer swap, so in-flight queries keep using the old snapshot
//! until they drop it.

use crate::index::build::IndexBuilder;
use crate::index::reader::Index;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Thread-safe holder for the current index
#[derive(Debug)]
pub struct SharedIndex<T = String> {
    current: RwLock<Arc<Index<T>>>,
    builder: IndexBuilder,
}

impl<T: AsRef<[u8]> + Sync> SharedIndex<T> {
    pub fn new(index: Index<T>) -> Self {
        Self::with_builder(index, IndexBuilder::new())
    }

    /// Use `builder` for later calls to [`rebuild`](Self::rebuild)
    pub fn with_builder(index: Index<T>, builder: IndexBuilder) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
            builder,
        }
    }

    /// Snapshot of the current index
    pub fn current(&self) -> Arc<Index<T>> {
        // The guarded value is a plain Arc, so a poisoned lock is still consistent
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Build a new index from `strings` and swap it in. Returns the previous index.
    pub fn rebuild(&self, strings: Vec<T>) -> Arc<Index<T>> {
        let index = self.builder.build(strings);
        self.replace(index)
    }

    /// Swap in an already built index. Returns the previous index.
    pub fn replace(&self, index: Index<T>) -> Arc<Index<T>> {
        let next = Arc::new(index);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!(
            previous = guard.len(),
            next = next.len(),
            "swapped index"
        );
        std::mem::replace(&mut *guard, next)
    }
}

impl<T: AsRef<[u8]> + Clone> SharedIndex<T> {
    /// Query the current index, returning owned matches
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Vec<T> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard.find(needle).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_through_handle() {
        let shared = SharedIndex::new(Index::new(vec!["hello world".to_string(), "bye".to_string()]));
        assert_eq!(shared.find("world"), vec!["hello world".to_string()]);
        assert!(shared.find("nothing").is_empty());
    }

    #[test]
    fn test_rebuild_keeps_old_snapshot() {
        let shared = SharedIndex::new(Index::new(vec!["alpha", "beta"]));
        let before = shared.current();

        let previous = shared.rebuild(vec!["gamma", "delta"]);

        // Snapshots taken before the swap still see the old corpus
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.find("alp"), vec![&"alpha"]);

        let after = shared.current();
        assert!(after.find("alp").is_empty());
        assert_eq!(after.find("gam"), vec![&"gamma"]);
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = Arc::new(SharedIndex::new(Index::new(
            (0..100).map(|i| format!("entry {}", i)).collect::<Vec<_>>(),
        )));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let hits = shared.find(format!("entry {}", t * 10 + 5));
                        assert!(!hits.is_empty());
                    }
                })
            })
            .collect();

        shared.rebuild((0..100).map(|i| format!("entry {}", i)).collect());

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
