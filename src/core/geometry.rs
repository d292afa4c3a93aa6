use serde::{Deserialize, Serialize};

use crate::core::{SurfacePoint, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BAR_WIDTH_PX: f64 = 12.0;
pub const DEFAULT_BAR_PADDING_PX: f64 = 1.0;
pub const DEFAULT_BAR_HEIGHT_PX: f64 = 32.0;
pub const DEFAULT_HOURS_LIMIT: u8 = 8;
pub const DEFAULT_COLUMN_HEIGHT_PX: f64 = 50.0;
pub const DEFAULT_LABEL_OFFSET_PX: f64 = 10.0;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 10.0;

/// Pixel geometry shared by hit-testing and drawing.
///
/// Fixed for the lifetime of a widget; every coordinate the widget produces or
/// consumes is derived from these constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarGeometry {
    pub bar_width_px: f64,
    pub bar_padding_px: f64,
    /// Pixel height of a bar holding `hours_limit`.
    pub bar_height_px: f64,
    pub hours_limit: u8,
    /// Height of the band cleared when a single column is repainted. Covers
    /// the bar and its label.
    pub column_height_px: f64,
    /// Distance from the bar baseline to the label baseline.
    pub label_offset_px: f64,
    pub label_font_size_px: f64,
}

impl Default for BarGeometry {
    fn default() -> Self {
        Self {
            bar_width_px: DEFAULT_BAR_WIDTH_PX,
            bar_padding_px: DEFAULT_BAR_PADDING_PX,
            bar_height_px: DEFAULT_BAR_HEIGHT_PX,
            hours_limit: DEFAULT_HOURS_LIMIT,
            column_height_px: DEFAULT_COLUMN_HEIGHT_PX,
            label_offset_px: DEFAULT_LABEL_OFFSET_PX,
            label_font_size_px: DEFAULT_LABEL_FONT_SIZE_PX,
        }
    }
}

/// Bar index and value under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarHit {
    pub index: usize,
    pub value: u8,
}

impl BarGeometry {
    #[must_use]
    pub fn with_hours_limit(mut self, hours_limit: u8) -> Self {
        self.hours_limit = hours_limit;
        self
    }

    #[must_use]
    pub fn with_bar_size(mut self, bar_width_px: f64, bar_padding_px: f64) -> Self {
        self.bar_width_px = bar_width_px;
        self.bar_padding_px = bar_padding_px;
        self
    }

    #[must_use]
    pub fn with_bar_height(mut self, bar_height_px: f64) -> Self {
        self.bar_height_px = bar_height_px;
        self
    }

    /// Horizontal pitch between consecutive bars.
    #[must_use]
    pub fn bar_size(self) -> f64 {
        self.bar_width_px + self.bar_padding_px
    }

    /// Pixels per hour.
    #[must_use]
    pub fn hours_to_pixel(self) -> f64 {
        self.bar_height_px / f64::from(self.hours_limit)
    }

    #[must_use]
    pub fn column_x(self, index: usize) -> f64 {
        index as f64 * self.bar_size()
    }

    /// Number of whole columns that fit in `viewport`, never less than one.
    #[must_use]
    pub fn column_count(self, viewport: Viewport) -> usize {
        ((f64::from(viewport.width) / self.bar_size()).floor() as usize).max(1)
    }

    /// Smallest viewport that fits `bar_count` columns and their labels.
    #[must_use]
    pub fn viewport_for(self, bar_count: usize) -> Viewport {
        let width = (bar_count.max(1) as f64 * self.bar_size()).ceil() as u32;
        let height = self.column_height_px.ceil() as u32;
        Viewport::new(width, height)
    }

    /// `floor(x / bar_size)`; `None` left of the surface or for non-finite input.
    #[must_use]
    pub fn bar_index_at(self, x: f64) -> Option<usize> {
        if !x.is_finite() || x < 0.0 {
            return None;
        }
        Some((x / self.bar_size()).floor() as usize)
    }

    /// Value under a vertical position: higher on the surface is more hours.
    ///
    /// Always lands in `[0, hours_limit]`.
    #[must_use]
    pub fn value_at(self, y: f64) -> u8 {
        let limit = f64::from(self.hours_limit);
        let step = (y / self.hours_to_pixel()).floor();
        let value = (limit - step).clamp(0.0, limit);
        if value.is_nan() { 0 } else { value as u8 }
    }

    /// Hit-tests a surface point, clamping the index into the columns that fit
    /// the viewport.
    #[must_use]
    pub fn hit_test(self, point: SurfacePoint, viewport: Viewport) -> BarHit {
        let last_column = self.column_count(viewport) - 1;
        let index = self.bar_index_at(point.x).unwrap_or(0).min(last_column);
        BarHit {
            index,
            value: self.value_at(point.y),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.bar_width_px.is_finite() || self.bar_width_px <= 0.0 {
            return Err(ChartError::InvalidGeometry(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        if !self.bar_padding_px.is_finite() || self.bar_padding_px < 0.0 {
            return Err(ChartError::InvalidGeometry(
                "bar padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.bar_height_px.is_finite() || self.bar_height_px <= 0.0 {
            return Err(ChartError::InvalidGeometry(
                "bar height must be finite and > 0".to_owned(),
            ));
        }
        if self.hours_limit == 0 {
            return Err(ChartError::InvalidGeometry(
                "hours limit must be > 0".to_owned(),
            ));
        }
        if !self.column_height_px.is_finite() || self.column_height_px < self.bar_height_px {
            return Err(ChartError::InvalidGeometry(
                "column height must be finite and >= bar height".to_owned(),
            ));
        }
        if !self.label_offset_px.is_finite() || self.label_offset_px < 0.0 {
            return Err(ChartError::InvalidGeometry(
                "label offset must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidGeometry(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
