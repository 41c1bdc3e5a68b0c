//! Fixed-capacity FIFO window of distinct integers.
//!
//! Values are kept oldest first. Pushing into a full window drops the
//! oldest value, and merges skip anything the window already holds.

use std::collections::{HashSet, VecDeque};

use types::{DEFAULT_WINDOW_CAPACITY, Window, WindowSnapshot};

/// A fixed-size window of unique values with oldest-first eviction.
///
/// # Example
/// ```
/// use window::SlidingWindow;
///
/// let mut window = SlidingWindow::new(3);
/// let snap = window.merge_unique(&[1, 2, 3, 4]);
/// assert!(snap.previous.is_empty());
/// assert_eq!(snap.current, vec![2, 3, 4]);
///
/// let snap = window.merge_unique(&[3, 5]);
/// assert_eq!(snap.current, vec![3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    data: VecDeque<i64>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window with the given capacity.
    ///
    /// # Panics
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "SlidingWindow capacity must be > 0");
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty window holding up to [`DEFAULT_WINDOW_CAPACITY`] values.
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }

    /// Merge a fetched batch into the window and return the before/after pair.
    ///
    /// Batch values already in the window before this call are skipped. The
    /// rest are appended in batch order, first occurrence only, evicting the
    /// oldest value whenever the window is full.
    pub fn merge_unique(&mut self, batch: &[i64]) -> WindowSnapshot {
        let previous = self.to_vec();
        let mut seen: HashSet<i64> = previous.iter().copied().collect();

        for &value in batch {
            if !seen.insert(value) {
                continue;
            }
            self.push(value);
        }

        WindowSnapshot::new(previous, self.to_vec())
    }

    /// Append a value, evicting the oldest one if the window is full.
    fn push(&mut self, value: i64) {
        if self.is_full() {
            self.data.pop_front();
        }
        self.data.push_back(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, value: i64) -> bool {
        self.data.contains(&value)
    }

    /// Iterate over values from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        self.data.iter().copied()
    }

    /// Owned copy of the contents, oldest first.
    pub fn to_vec(&self) -> Window {
        self.data.iter().copied().collect()
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
