use serde::{Deserialize, Serialize};

use crate::animation::{AnimationConfig, SupersededTweenPolicy};
use crate::core::{BarGeometry, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public widget bootstrap configuration.
///
/// This type is serializable so hosts can ship the widget setup next to their
/// page or app configuration. Missing `geometry` / `animation` sections fall
/// back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartWidgetConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub geometry: BarGeometry,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl ChartWidgetConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            geometry: BarGeometry::default(),
            animation: AnimationConfig::default(),
        }
    }

    /// Config with a viewport sized to exactly fit `bar_count` default bars.
    #[must_use]
    pub fn for_series_len(bar_count: usize) -> Self {
        let geometry = BarGeometry::default();
        Self::new(geometry.viewport_for(bar_count))
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: BarGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_tween_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation.tween_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_superseded_tween_policy(mut self, policy: SupersededTweenPolicy) -> Self {
        self.animation.superseded_tween_policy = policy;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.geometry.validate()?;
        self.animation.validate()
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}
