use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Anchor and current bar of a drag, in gesture order.
///
/// `end` may sit left of `begin`; consumers always see the normalized
/// inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSpan {
    pub begin: usize,
    pub end: usize,
}

impl DragSpan {
    #[must_use]
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    #[must_use]
    pub const fn single(index: usize) -> Self {
        Self::new(index, index)
    }

    #[must_use]
    pub fn low(self) -> usize {
        self.begin.min(self.end)
    }

    #[must_use]
    pub fn high(self) -> usize {
        self.begin.max(self.end)
    }

    /// Ascending inclusive range regardless of drag direction.
    #[must_use]
    pub fn normalized(self) -> RangeInclusive<usize> {
        self.low()..=self.high()
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.normalized().contains(&index)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.high() - self.low() + 1
    }

    #[must_use]
    pub fn is_reversed(self) -> bool {
        self.end < self.begin
    }
}
