//! Per-bar tweens for external series updates.
//!
//! Each bar animates independently from its old to its new value. A tween
//! starts its clock on the first animation frame it sees and retires once its
//! duration has elapsed. Tweens from an older update keep running unless the
//! cancel policy is selected, so overlapping updates can visibly race.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TWEEN_DURATION_MS: f64 = 200.0;

/// What happens to in-flight tweens when a newer update arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupersededTweenPolicy {
    /// Older tweens run to completion alongside the new ones.
    #[default]
    Keep,
    /// Older tweens are dropped as soon as a newer update is spawned.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub tween_duration_ms: f64,
    pub superseded_tween_policy: SupersededTweenPolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tween_duration_ms: DEFAULT_TWEEN_DURATION_MS,
            superseded_tween_policy: SupersededTweenPolicy::Keep,
        }
    }
}

impl AnimationConfig {
    pub fn validate(self) -> ChartResult<()> {
        if !self.tween_duration_ms.is_finite() || self.tween_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "tween duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Linear interpolation of one bar between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub index: usize,
    pub from: f64,
    pub to: f64,
    pub start_ms: Option<f64>,
    pub generation: u64,
}

/// Value a tween produced for one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub index: usize,
    pub value: f64,
    pub finished: bool,
}

impl Tween {
    #[must_use]
    pub fn new(index: usize, from: u8, to: u8, generation: u64) -> Self {
        Self {
            index,
            from: f64::from(from),
            to: f64::from(to),
            start_ms: None,
            generation,
        }
    }

    /// Advances the tween to `timestamp_ms`.
    pub fn sample(&mut self, timestamp_ms: f64, duration_ms: f64) -> TweenSample {
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        let progress = (timestamp_ms - start).max(0.0);
        let fraction = if duration_ms > 0.0 {
            (progress / duration_ms).min(1.0)
        } else {
            1.0
        };
        TweenSample {
            index: self.index,
            value: self.from + (self.to - self.from) * fraction,
            finished: progress >= duration_ms,
        }
    }
}

/// Live tweens of a widget, tagged with the update that spawned them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TweenSet {
    tweens: Vec<Tween>,
    generation: u64,
    config: AnimationConfig,
}

impl TweenSet {
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            tweens: Vec::new(),
            generation: 0,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Generation of the most recent update.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tween> {
        self.tweens.iter()
    }

    /// Starts one tween per bar from `from` to `to` and returns the new
    /// generation.
    pub fn spawn(&mut self, from: &[u8], to: &[u8]) -> u64 {
        self.generation += 1;
        if self.config.superseded_tween_policy == SupersededTweenPolicy::Cancel {
            self.tweens.clear();
        }
        let generation = self.generation;
        self.tweens.extend(
            from.iter()
                .zip(to)
                .enumerate()
                .map(|(index, (old, new))| Tween::new(index, *old, *new, generation)),
        );
        generation
    }

    /// Advances every live tween and drops the ones that finished.
    ///
    /// Samples come out oldest generation first so a newer tween for the same
    /// bar paints last.
    pub fn step(&mut self, timestamp_ms: f64) -> Vec<TweenSample> {
        let duration_ms = self.config.tween_duration_ms;
        let samples: Vec<TweenSample> = self
            .tweens
            .iter_mut()
            .map(|tween| tween.sample(timestamp_ms, duration_ms))
            .collect();
        let mut finished = samples.iter().map(|sample| sample.finished);
        self.tweens.retain(|_| !finished.next().unwrap_or(true));
        trace!(
            timestamp_ms,
            stepped = samples.len(),
            remaining = self.tweens.len(),
            "tween frame"
        );
        samples
    }

    pub fn cancel_all(&mut self) {
        self.tweens.clear();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn tween_clock_starts_on_first_frame() {
        let mut tween = Tween::new(0, 0, 8, 1);

        let first = tween.sample(1_000.0, 200.0);
        assert_relative_eq!(first.value, 0.0);
        assert!(!first.finished);

        let half = tween.sample(1_100.0, 200.0);
        assert_relative_eq!(half.value, 4.0);

        let done = tween.sample(1_250.0, 200.0);
        assert_relative_eq!(done.value, 8.0);
        assert!(done.finished);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tween = Tween::new(2, 6, 1, 1);
        let sample = tween.sample(5.0, 0.0);
        assert!(sample.finished);
        assert_relative_eq!(sample.value, 1.0);
    }

    #[test]
    fn cancel_policy_drops_older_generation() {
        let mut set = TweenSet::new(AnimationConfig {
            superseded_tween_policy: SupersededTweenPolicy::Cancel,
            ..AnimationConfig::default()
        });
        set.spawn(&[0, 0], &[4, 4]);
        let generation = set.spawn(&[4, 4], &[8, 8]);

        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|tween| tween.generation == generation));
    }

    #[test]
    fn keep_policy_lets_generations_overlap() {
        let mut set = TweenSet::new(AnimationConfig::default());
        set.spawn(&[0, 0], &[4, 4]);
        set.spawn(&[4, 4], &[8, 8]);
        assert_eq!(set.len(), 4);

        set.step(0.0);
        let samples = set.step(200.0);
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|sample| sample.finished));
        assert!(set.is_empty());
    }
}
