use crate::core::{BarGeometry, DragOverlay, DragSpan, HoursSeries, Viewport};
use crate::render::{
    DrawCommand, FrameScope, RectArea, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::BarPalette;

/// Read-only view of everything needed to paint bars.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BarScene<'a> {
    pub viewport: Viewport,
    pub geometry: BarGeometry,
    pub palette: BarPalette,
    pub series: &'a HoursSeries,
    pub overlay: &'a DragOverlay,
    pub active_span: Option<DragSpan>,
}

impl BarScene<'_> {
    /// Value shown for `index`: explicit override, then overlay, then series.
    pub fn effective_value(&self, index: usize, override_value: Option<f64>) -> f64 {
        override_value
            .or_else(|| self.overlay.get(index).map(f64::from))
            .or_else(|| self.series.get(index).map(f64::from))
            .unwrap_or(0.0)
    }

    /// Frame repainting a single column.
    pub fn bar_frame(&self, index: usize, override_value: Option<f64>) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport, FrameScope::Columns(vec![index]));
        self.push_bar(&mut frame, index, override_value);
        frame
    }

    /// Frame drawing the hover highlight over one column.
    pub fn hover_frame(&self, index: usize) -> RenderFrame {
        let geometry = self.geometry;
        RenderFrame::new(self.viewport, FrameScope::Columns(vec![index])).with_rect(
            RectPrimitive::new(
                geometry.column_x(index),
                0.0,
                geometry.bar_width_px,
                geometry.bar_height_px,
                self.palette.hover_color,
            ),
        )
    }

    /// Frame clearing the surface and drawing every bar in index order.
    pub fn full_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::full(self.viewport).with_clear(RectArea::new(
            0.0,
            0.0,
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        ));
        for index in 0..self.series.len() {
            self.push_bar(&mut frame, index, None);
        }
        frame
    }

    fn push_bar(&self, frame: &mut RenderFrame, index: usize, override_value: Option<f64>) {
        let geometry = self.geometry;
        let palette = self.palette;
        let value = self.effective_value(index, override_value);
        let x = geometry.column_x(index);

        let (height, fill) = if value == 0.0 {
            (1.0, palette.zero_color)
        } else {
            (value * geometry.hours_to_pixel(), palette.active_color)
        };

        frame.commands.push(DrawCommand::Clear(RectArea::new(
            x,
            0.0,
            geometry.bar_width_px,
            geometry.column_height_px,
        )));
        frame.commands.push(DrawCommand::FillRect(RectPrimitive::new(
            x,
            0.0,
            geometry.bar_width_px,
            geometry.bar_height_px,
            palette.track_color,
        )));
        frame.commands.push(DrawCommand::FillRect(RectPrimitive::new(
            x,
            geometry.bar_height_px - height,
            geometry.bar_width_px,
            height,
            fill,
        )));

        let in_drag = self.active_span.is_some_and(|span| span.contains(index));
        if value > 0.0 || in_drag {
            frame.commands.push(DrawCommand::Text(TextPrimitive::new(
                format!("{}", value.trunc() as i64),
                x + geometry.bar_width_px / 2.0,
                geometry.bar_height_px + geometry.label_offset_px,
                geometry.label_font_size_px,
                palette.label_color,
                TextHAlign::Center,
            )));
        }
    }
}
