use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DragSpan;

/// Provisional values painted by an in-progress drag.
///
/// Entries shadow the series for rendering only. Only indices below
/// `bar_count` are ever stored, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragOverlay {
    entries: IndexMap<usize, u8>,
}

impl DragOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the overlay so that exactly the bars in `span` carry `value`.
    pub fn paint(&mut self, span: DragSpan, value: u8, bar_count: usize) {
        self.entries.clear();
        for index in span.normalized().take_while(|index| *index < bar_count) {
            self.entries.insert(index, value);
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.entries.get(&index).copied()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.entries.iter().map(|(index, value)| (*index, *value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
