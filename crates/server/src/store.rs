//! Process-wide number window.
//!
//! The window is only reachable through [`WindowStore::merge_unique`], which
//! holds the lock for the whole snapshot/filter/evict/snapshot sequence.
//! Callers fetch from upstream before calling in, so the lock is never held
//! across network I/O.

use tokio::sync::Mutex;
use types::WindowSnapshot;
use window::SlidingWindow;

/// Shared owner of the single FIFO window.
#[derive(Debug)]
pub struct WindowStore {
    window: Mutex<SlidingWindow>,
    capacity: usize,
}

impl WindowStore {
    /// Create an empty store.
    ///
    /// # Panics
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            window: Mutex::new(SlidingWindow::new(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Merge `batch` into the window as one atomic step.
    pub async fn merge_unique(&self, batch: &[i64]) -> WindowSnapshot {
        let mut window = self.window.lock().await;
        window.merge_unique(batch)
    }
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(types::DEFAULT_WINDOW_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_merge_through_store() {
        let store = WindowStore::default();
        assert_eq!(store.capacity(), 10);

        let first = store.merge_unique(&[1, 2, 3]).await;
        assert!(first.previous.is_empty());

        let second = store.merge_unique(&[3, 5, 7]).await;
        assert_eq!(second.previous, vec![1, 2, 3]);
        assert_eq!(second.current, vec![1, 2, 3, 5, 7]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_merges_form_a_single_chain() {
        let store = Arc::new(WindowStore::new(10));

        let handles: Vec<_> = (0..64i64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.merge_unique(&[i]).await })
            })
            .collect();

        let mut snapshots = Vec::new();
        for handle in handles {
            snapshots.push(handle.await.unwrap());
        }

        for snap in &snapshots {
            assert!(snap.current.len() <= 10);
            let unique: HashSet<_> = snap.current.iter().collect();
            assert_eq!(unique.len(), snap.current.len());
        }

        // Every merge inserted a fresh value, so each state appears exactly
        // once as a `current` and the `previous` states link them in order.
        let currents: Vec<&Vec<i64>> = snapshots.iter().map(|s| &s.current).collect();
        let starts = snapshots.iter().filter(|s| s.previous.is_empty()).count();
        assert_eq!(starts, 1);
        for snap in snapshots.iter().filter(|s| !s.previous.is_empty()) {
            let links = currents.iter().filter(|c| **c == &snap.previous).count();
            assert_eq!(links, 1, "dangling previous state {:?}", snap.previous);
        }
    }
}
