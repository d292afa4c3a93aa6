use tracing::{debug, warn};

use crate::animation::TweenSet;
use crate::core::{
    BarGeometry, BarHit, DragOverlay, HoursSeries, SurfaceOrigin, SurfacePoint, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DragSession, InteractionMode, InteractionState, OverlayEffect, PointerEvent, PointerSample,
    Repaint,
};
use crate::render::{RenderFrame, Renderer};

use super::bar_render_frame_builder::BarScene;
use super::{BarPalette, ChartWidgetConfig};

/// Host hook receiving the full series after every committed drag.
pub type CommitCallback = Box<dyn FnMut(&[u8])>;

/// Interactive hours bar chart bound to one drawing surface.
///
/// The host forwards pointer events (in page coordinates, including moves and
/// releases outside the surface so drags keep tracking), calls `update` when
/// upstream data changes, and calls `animation_frame` once per display frame
/// while `has_pending_animation` is true.
pub struct ChartWidget<R: Renderer> {
    renderer: R,
    config: ChartWidgetConfig,
    palette: BarPalette,
    origin: SurfaceOrigin,
    series: HoursSeries,
    overlay: DragOverlay,
    interaction: InteractionState,
    tweens: TweenSet,
    on_commit: Option<CommitCallback>,
}

impl<R: Renderer> ChartWidget<R> {
    pub fn new(renderer: R, config: ChartWidgetConfig, values: Vec<u8>) -> ChartResult<Self> {
        config.validate()?;
        let series = HoursSeries::new(values, config.geometry.hours_limit)?;
        debug!(
            bars = series.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            "chart widget created"
        );

        Ok(Self {
            renderer,
            config,
            palette: BarPalette::DEFAULT,
            origin: SurfaceOrigin::default(),
            series,
            overlay: DragOverlay::new(),
            interaction: InteractionState::default(),
            tweens: TweenSet::new(config.animation),
            on_commit: None,
        })
    }

    #[must_use]
    pub fn with_commit_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[u8]) + 'static,
    {
        self.set_commit_callback(callback);
        self
    }

    pub fn set_commit_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&[u8]) + 'static,
    {
        self.on_commit = Some(Box::new(callback));
    }

    pub fn clear_commit_callback(&mut self) {
        self.on_commit = None;
    }

    #[must_use]
    pub fn config(&self) -> ChartWidgetConfig {
        self.config
    }

    #[must_use]
    pub fn geometry(&self) -> BarGeometry {
        self.config.geometry
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn surface_origin(&self) -> SurfaceOrigin {
        self.origin
    }

    /// Sets where the surface sits in page space; pointer events are
    /// translated by it.
    pub fn set_surface_origin(&mut self, origin: SurfaceOrigin) {
        self.origin = origin;
    }

    /// Committed values.
    #[must_use]
    pub fn series(&self) -> &[u8] {
        self.series.as_slice()
    }

    #[must_use]
    pub fn hours_series(&self) -> &HoursSeries {
        &self.series
    }

    #[must_use]
    pub fn overlay(&self) -> &DragOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.interaction.hover_index()
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.interaction.drag_session()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Bar and value under a page-space position, clamped to the surface.
    #[must_use]
    pub fn hit_test(&self, page_x: f64, page_y: f64) -> BarHit {
        self.config
            .geometry
            .hit_test(self.origin.to_local(page_x, page_y), self.config.viewport)
    }

    pub fn pointer_down(&mut self, page_x: f64, page_y: f64) -> ChartResult<()> {
        match self.sample(page_x, page_y) {
            Some(sample) => self.dispatch(PointerEvent::Down(sample)),
            None => Ok(()),
        }
    }

    pub fn pointer_move(&mut self, page_x: f64, page_y: f64) -> ChartResult<()> {
        match self.sample(page_x, page_y) {
            Some(sample) => self.dispatch(PointerEvent::Move(sample)),
            None => Ok(()),
        }
    }

    pub fn pointer_up(&mut self) -> ChartResult<()> {
        self.dispatch(PointerEvent::Up)
    }

    /// Clears the hover highlight when the pointer leaves the surface.
    /// An active drag is left alone.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.dispatch(PointerEvent::Leave)
    }

    /// Replaces the series and starts animating every bar toward its new value.
    ///
    /// The committed series changes immediately; tweens only affect what is
    /// drawn on subsequent `animation_frame` calls.
    pub fn update(&mut self, values: Vec<u8>) -> ChartResult<()> {
        let previous = self.series.replace(values).inspect_err(|err| {
            warn!(error = %err, "rejected series update");
        })?;
        let generation = self.tweens.spawn(&previous, self.series.as_slice());
        debug!(
            generation,
            live_tweens = self.tweens.len(),
            "series updated, tweens spawned"
        );
        Ok(())
    }

    #[must_use]
    pub fn has_pending_animation(&self) -> bool {
        !self.tweens.is_empty()
    }

    #[must_use]
    pub fn tweens(&self) -> &TweenSet {
        &self.tweens
    }

    /// Advances live tweens to `timestamp_ms` and repaints their bars.
    ///
    /// Returns whether another frame is needed.
    pub fn animation_frame(&mut self, timestamp_ms: f64) -> ChartResult<bool> {
        if self.tweens.is_empty() {
            return Ok(false);
        }

        let samples = self.tweens.step(timestamp_ms);
        let scene = self.scene();
        let mut frame: Option<RenderFrame> = None;
        for sample in samples.iter().filter(|s| s.index < self.series.len()) {
            let bar = scene.bar_frame(sample.index, Some(sample.value));
            match frame.as_mut() {
                Some(frame) => frame.extend(bar),
                None => frame = Some(bar),
            }
        }
        if let Some(frame) = frame {
            self.renderer.render(&frame)?;
        }

        if self.tweens.is_empty() {
            debug!(timestamp_ms, "tweens finished");
        }
        Ok(!self.tweens.is_empty())
    }

    /// Clears the surface and draws every bar.
    pub fn draw(&mut self) -> ChartResult<()> {
        let frame = self.build_full_frame();
        self.renderer.render(&frame)
    }

    /// Repaints one bar, optionally showing `override_value` instead of the
    /// overlay or committed value.
    pub fn draw_one(&mut self, index: usize, override_value: Option<f64>) -> ChartResult<()> {
        let frame = self.build_bar_frame(index, override_value)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn build_full_frame(&self) -> RenderFrame {
        self.scene().full_frame()
    }

    pub fn build_bar_frame(
        &self,
        index: usize,
        override_value: Option<f64>,
    ) -> ChartResult<RenderFrame> {
        self.check_index(index)?;
        if override_value.is_some_and(|value| !value.is_finite() || value < 0.0) {
            return Err(ChartError::InvalidData(
                "override value must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self.scene().bar_frame(index, override_value))
    }

    pub fn build_hover_frame(&self, index: usize) -> ChartResult<RenderFrame> {
        self.check_index(index)?;
        Ok(self.scene().hover_frame(index))
    }

    fn check_index(&self, index: usize) -> ChartResult<()> {
        if index >= self.series.len() {
            return Err(ChartError::InvalidData(format!(
                "bar index {index} out of range for {} bars",
                self.series.len()
            )));
        }
        Ok(())
    }

    fn scene(&self) -> BarScene<'_> {
        BarScene {
            viewport: self.config.viewport,
            geometry: self.config.geometry,
            palette: self.palette,
            series: &self.series,
            overlay: &self.overlay,
            active_span: self.interaction.active_span(),
        }
    }

    fn sample(&self, page_x: f64, page_y: f64) -> Option<PointerSample> {
        let point: SurfacePoint = self.origin.to_local(page_x, page_y);
        if !point.is_finite() {
            debug!(page_x, page_y, "ignoring non-finite pointer position");
            return None;
        }
        let geometry = self.config.geometry;
        Some(PointerSample {
            index: geometry.bar_index_at(point.x),
            value: geometry.value_at(point.y),
            in_vertical_bounds: self.config.viewport.contains_y(point.y),
        })
    }

    fn dispatch(&mut self, event: PointerEvent) -> ChartResult<()> {
        let transition = self.interaction.transition(event, self.series.len());
        if transition.is_noop() {
            self.interaction = transition.state;
            return Ok(());
        }

        let previous_mode = self.interaction.mode();
        self.interaction = transition.state;
        if previous_mode != self.interaction.mode() {
            debug!(from = ?previous_mode, to = ?self.interaction.mode(), "interaction mode changed");
        }

        let committed = match transition.overlay {
            OverlayEffect::Keep => false,
            OverlayEffect::Paint { span, value } => {
                self.overlay.paint(span, value, self.series.len());
                false
            }
            OverlayEffect::Commit => {
                let changed = self.series.apply_overlay(&self.overlay);
                self.overlay.clear();
                debug!(changed, "drag committed");
                true
            }
        };

        let rendered = self.render_repaints(&transition.repaints);

        if committed {
            if let Some(callback) = self.on_commit.as_mut() {
                callback(self.series.as_slice());
            }
        }
        rendered
    }

    fn render_repaints(&mut self, repaints: &[Repaint]) -> ChartResult<()> {
        let scene = self.scene();
        let mut frame: Option<RenderFrame> = None;
        for repaint in repaints {
            let part = match *repaint {
                Repaint::Full => scene.full_frame(),
                Repaint::Bar(index) => scene.bar_frame(index, None),
                Repaint::Hover(index) => scene.hover_frame(index),
            };
            match frame.as_mut() {
                Some(frame) => frame.extend(part),
                None => frame = Some(part),
            }
        }
        match frame {
            Some(frame) => self.renderer.render(&frame),
            None => Ok(()),
        }
    }
}
