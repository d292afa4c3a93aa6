use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;

use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{ChartWidget, ChartWidgetConfig};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

type SharedWidget = Rc<RefCell<ChartWidget<CairoRenderer>>>;

/// Mounts a [`ChartWidget`] on a GTK `DrawingArea`.
///
/// The widget paints into an offscreen Cairo surface that the draw function
/// blits. `GestureDrag` keeps an implicit grab, so drags that leave the area
/// keep tracking until the button is released. Tweens are driven by the
/// area's frame clock.
///
/// The commit callback runs while the widget is mutably borrowed; it must not
/// call back into the adapter synchronously.
pub struct GtkChartAdapter {
    area: gtk::DrawingArea,
    widget: SharedWidget,
    ticking: Rc<Cell<bool>>,
}

impl GtkChartAdapter {
    pub fn new(config: ChartWidgetConfig, values: Vec<u8>) -> ChartResult<Self> {
        let width = i32::try_from(config.viewport.width).unwrap_or(i32::MAX);
        let height = i32::try_from(config.viewport.height).unwrap_or(i32::MAX);
        let renderer = CairoRenderer::new(width, height)?;
        let mut widget = ChartWidget::new(renderer, config, values)?;
        widget.draw()?;

        let area = gtk::DrawingArea::new();
        area.set_content_width(width);
        area.set_content_height(height);

        let adapter = Self {
            area,
            widget: Rc::new(RefCell::new(widget)),
            ticking: Rc::new(Cell::new(false)),
        };
        adapter.install_draw_func();
        adapter.install_drag_gesture();
        adapter.install_motion_controller();
        Ok(adapter)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Committed values.
    #[must_use]
    pub fn series(&self) -> Vec<u8> {
        self.widget.borrow().series().to_vec()
    }

    pub fn set_commit_callback<F>(&self, callback: F)
    where
        F: FnMut(&[u8]) + 'static,
    {
        self.widget.borrow_mut().set_commit_callback(callback);
    }

    /// Pushes upstream values and animates toward them on the frame clock.
    pub fn update(&self, values: Vec<u8>) -> ChartResult<()> {
        self.widget.borrow_mut().update(values)?;
        self.start_ticking();
        Ok(())
    }

    fn install_draw_func(&self) {
        let widget = Rc::clone(&self.widget);
        self.area
            .set_draw_func(move |_area, context, _width, _height| {
                let widget = widget.borrow();
                let painted = context
                    .set_source_surface(widget.renderer().surface(), 0.0, 0.0)
                    .and_then(|()| context.paint());
                if let Err(err) = painted {
                    warn!(error = %err, "failed to blit chart surface");
                }
            });
    }

    fn install_drag_gesture(&self) {
        let drag = gtk::GestureDrag::new();
        drag.set_button(gtk::gdk::BUTTON_PRIMARY);

        let widget = Rc::clone(&self.widget);
        let area = self.area.downgrade();
        drag.connect_drag_begin(move |_gesture, x, y| {
            report(widget.borrow_mut().pointer_down(x, y));
            queue_draw(&area);
        });

        let widget = Rc::clone(&self.widget);
        let area = self.area.downgrade();
        drag.connect_drag_update(move |gesture, dx, dy| {
            if let Some((start_x, start_y)) = gesture.start_point() {
                report(widget.borrow_mut().pointer_move(start_x + dx, start_y + dy));
                queue_draw(&area);
            }
        });

        let widget = Rc::clone(&self.widget);
        let area = self.area.downgrade();
        drag.connect_drag_end(move |gesture, dx, dy| {
            let mut widget = widget.borrow_mut();
            if let Some((start_x, start_y)) = gesture.start_point() {
                report(widget.pointer_move(start_x + dx, start_y + dy));
            }
            report(widget.pointer_up());
            queue_draw(&area);
        });

        self.area.add_controller(drag);
    }

    fn install_motion_controller(&self) {
        let motion = gtk::EventControllerMotion::new();

        let widget = Rc::clone(&self.widget);
        let area = self.area.downgrade();
        motion.connect_motion(move |_controller, x, y| {
            report(widget.borrow_mut().pointer_move(x, y));
            queue_draw(&area);
        });

        // Leaving the area clears the hover highlight; drags keep their grab.
        let widget = Rc::clone(&self.widget);
        let area = self.area.downgrade();
        motion.connect_leave(move |_controller| {
            report(widget.borrow_mut().pointer_leave());
            queue_draw(&area);
        });

        self.area.add_controller(motion);
    }

    fn start_ticking(&self) {
        if self.ticking.replace(true) {
            return;
        }

        let widget = Rc::clone(&self.widget);
        let ticking = Rc::clone(&self.ticking);
        self.area.add_tick_callback(move |area, clock| {
            let timestamp_ms = clock.frame_time() as f64 / 1_000.0;
            let more = widget.borrow_mut().animation_frame(timestamp_ms);
            area.queue_draw();
            match more {
                Ok(true) => glib::ControlFlow::Continue,
                Ok(false) => {
                    ticking.set(false);
                    glib::ControlFlow::Break
                }
                Err(err) => {
                    warn!(error = %err, "tween frame failed");
                    ticking.set(false);
                    glib::ControlFlow::Break
                }
            }
        });
    }
}

fn queue_draw(area: &glib::WeakRef<gtk::DrawingArea>) {
    if let Some(area) = area.upgrade() {
        area.queue_draw();
    }
}

fn report(result: ChartResult<()>) {
    if let Err(err) = result {
        warn!(error = %err, "chart widget failed to handle pointer event");
    }
}
