use serde::{Deserialize, Serialize};

use crate::core::DragOverlay;
use crate::error::{ChartError, ChartResult};

/// Authoritative hours-per-bar values.
///
/// Length is fixed once created; every value stays within `0..=limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSeries {
    values: Vec<u8>,
    limit: u8,
}

impl HoursSeries {
    pub fn new(values: Vec<u8>, limit: u8) -> ChartResult<Self> {
        validate_values(&values, limit)?;
        Ok(Self { values, limit })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> u8 {
        self.limit
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.values.clone()
    }

    /// Replaces every value at once and returns the previous values.
    ///
    /// The new values must have the same length and respect the limit; on
    /// error the series is left untouched.
    pub fn replace(&mut self, values: Vec<u8>) -> ChartResult<Vec<u8>> {
        if values.len() != self.values.len() {
            return Err(ChartError::SeriesLengthMismatch {
                expected: self.values.len(),
                actual: values.len(),
            });
        }
        validate_values(&values, self.limit)?;
        Ok(std::mem::replace(&mut self.values, values))
    }

    /// Writes every overlay entry that addresses an existing bar.
    ///
    /// Returns the number of bars whose value changed.
    pub fn apply_overlay(&mut self, overlay: &DragOverlay) -> usize {
        let mut changed = 0;
        for (index, value) in overlay.iter() {
            if let Some(slot) = self.values.get_mut(index) {
                let value = value.min(self.limit);
                if *slot != value {
                    *slot = value;
                    changed += 1;
                }
            }
        }
        changed
    }
}

fn validate_values(values: &[u8], limit: u8) -> ChartResult<()> {
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v > limit) {
        return Err(ChartError::ValueOutOfRange {
            index,
            value,
            limit,
        });
    }
    Ok(())
}
