//! Before/after view of one window merge.

use serde::{Deserialize, Serialize};

use crate::Window;

/// Window contents immediately before and after a single merge.
///
/// Both sides are owned copies, so later merges never change a snapshot
/// that has already been handed out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub previous: Window,
    pub current: Window,
}

impl WindowSnapshot {
    pub fn new(previous: Window, current: Window) -> Self {
        Self { previous, current }
    }

    /// True when the merge inserted nothing.
    pub fn is_unchanged(&self) -> bool {
        self.previous == self.current
    }

    /// Values present after the merge that were absent before it.
    pub fn inserted(&self) -> impl Iterator<Item = i64> + '_ {
        self.current
            .iter()
            .copied()
            .filter(|v| !self.previous.contains(v))
    }

    /// Values present before the merge that were evicted by it.
    pub fn evicted(&self) -> impl Iterator<Item = i64> + '_ {
        self.previous
            .iter()
            .copied()
            .filter(|v| !self.current.contains(v))
    }
}
