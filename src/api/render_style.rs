use crate::render::Color;

/// Fixed colors used to paint bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPalette {
    /// Background of each bar's track.
    pub track_color: Color,
    /// Fill of a bar holding a positive value.
    pub active_color: Color,
    /// One-pixel indicator of a bar holding zero.
    pub zero_color: Color,
    pub label_color: Color,
    /// Translucent highlight drawn over the hovered or dragged-to bar.
    pub hover_color: Color,
}

impl BarPalette {
    pub const DEFAULT: Self = Self {
        track_color: Color::from_hex(0xEFEFF4),
        active_color: Color::from_hex(0x34BE54),
        zero_color: Color::from_hex(0x6D6C7B),
        label_color: Color::from_hex(0x6D6C7B),
        hover_color: Color::rgba(0.0, 0.0, 0.0, 0.4),
    };
}

impl Default for BarPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
