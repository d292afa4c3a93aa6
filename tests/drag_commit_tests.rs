use std::cell::RefCell;
use std::rc::Rc;

use range_chart::api::{ChartWidget, ChartWidgetConfig};
use range_chart::core::DragSpan;
use range_chart::interaction::{InteractionMode, InteractionState};
use range_chart::render::NullRenderer;

const BAR: f64 = 13.0;

fn bar_x(index: usize) -> f64 {
    index as f64 * BAR + 5.0
}

/// Vertical position that maps to `value` with the default geometry.
fn value_y(value: u8) -> f64 {
    f64::from(8 - value) * 4.0 + 1.0
}

fn build_widget(values: Vec<u8>) -> (ChartWidget<NullRenderer>, Rc<RefCell<Vec<Vec<u8>>>>) {
    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    let config = ChartWidgetConfig::for_series_len(values.len());
    let widget = ChartWidget::new(NullRenderer::default(), config, values)
        .expect("widget init")
        .with_commit_callback(move |series| sink.borrow_mut().push(series.to_vec()));
    (widget, commits)
}

#[test]
fn forward_drag_paints_inclusive_span() {
    let (mut widget, commits) = build_widget(vec![1, 1, 1, 1, 1, 1, 1, 1]);

    widget.pointer_down(bar_x(2), value_y(4)).expect("down");
    widget.pointer_move(bar_x(5), value_y(4)).expect("move");
    widget.pointer_up().expect("up");

    assert_eq!(widget.series(), &[1, 1, 4, 4, 4, 4, 1, 1]);
    assert_eq!(commits.borrow().as_slice(), &[vec![1, 1, 4, 4, 4, 4, 1, 1]]);
    assert_eq!(widget.interaction_mode(), InteractionMode::Idle);
    assert!(widget.overlay().is_empty());
}

#[test]
fn reverse_drag_paints_the_same_span() {
    let (mut widget, commits) = build_widget(vec![1, 1, 1, 1, 1, 1, 1, 1]);

    widget.pointer_down(bar_x(5), value_y(4)).expect("down");
    widget.pointer_move(bar_x(2), value_y(4)).expect("move");

    let session = widget.drag_session().expect("dragging");
    assert_eq!(session.span, DragSpan::new(5, 2));

    widget.pointer_up().expect("up");
    assert_eq!(widget.series(), &[1, 1, 4, 4, 4, 4, 1, 1]);
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn overlay_previews_without_touching_series() {
    let (mut widget, commits) = build_widget(vec![0, 2, 3, 5, 8]);

    widget.pointer_down(bar_x(1), value_y(6)).expect("down");
    widget.pointer_move(bar_x(3), value_y(6)).expect("move");

    assert_eq!(widget.series(), &[0, 2, 3, 5, 8]);
    assert_eq!(widget.overlay().len(), 3);
    assert_eq!(widget.overlay().get(2), Some(6));
    assert_eq!(widget.overlay().get(4), None);
    assert!(commits.borrow().is_empty());
}

#[test]
fn shrinking_drag_releases_bars_outside_the_new_span() {
    let (mut widget, _commits) = build_widget(vec![0; 8]);

    widget.pointer_down(bar_x(1), value_y(3)).expect("down");
    widget.pointer_move(bar_x(6), value_y(3)).expect("grow");
    widget.pointer_move(bar_x(3), value_y(5)).expect("shrink");
    widget.pointer_up().expect("up");

    assert_eq!(widget.series(), &[0, 5, 5, 5, 0, 0, 0, 0]);
}

#[test]
fn drag_keeps_tracking_outside_the_surface() {
    let (mut widget, _commits) = build_widget(vec![0; 6]);

    widget.pointer_down(bar_x(1), value_y(2)).expect("down");
    widget.pointer_move(bar_x(3), -250.0).expect("move above surface");
    assert_eq!(widget.drag_session().map(|s| s.value), Some(8));

    // Well past the last bar: ignored, the span keeps its previous end.
    widget.pointer_move(bar_x(40), value_y(1)).expect("move past bars");
    assert_eq!(widget.drag_session().map(|s| s.span), Some(DragSpan::new(1, 3)));

    widget.pointer_up().expect("up");
    assert_eq!(widget.series(), &[0, 8, 8, 8, 0, 0]);
}

#[test]
fn drag_landing_just_past_the_last_bar_paints_through_it() {
    let (mut widget, commits) = build_widget(vec![0; 8]);

    widget.pointer_down(bar_x(3), 1.0).expect("down");
    widget.pointer_move(bar_x(8), 1.0).expect("move one past the bars");
    assert_eq!(widget.drag_session().map(|s| s.span), Some(DragSpan::new(3, 7)));

    widget.pointer_up().expect("up");
    assert_eq!(widget.series(), &[0, 0, 0, 8, 8, 8, 8, 8]);
    assert_eq!(commits.borrow().as_slice(), &[vec![0, 0, 0, 8, 8, 8, 8, 8]]);
}

#[test]
fn leaving_the_surface_mid_drag_keeps_the_span() {
    let (mut widget, _commits) = build_widget(vec![0; 8]);

    widget.pointer_down(bar_x(5), value_y(3)).expect("down");
    widget.pointer_move(bar_x(7), value_y(3)).expect("move");
    widget.pointer_leave().expect("leave");
    assert_eq!(widget.drag_session().map(|s| s.span), Some(DragSpan::new(5, 7)));

    widget.pointer_move(bar_x(20), value_y(3)).expect("move past bars");
    widget.pointer_up().expect("up");
    assert_eq!(widget.series(), &[0, 0, 0, 0, 0, 3, 3, 3]);
}

#[test]
fn click_without_move_sets_single_bar() {
    let (mut widget, commits) = build_widget(vec![2, 2, 2]);

    widget.pointer_down(bar_x(1), value_y(7)).expect("down");
    widget.pointer_up().expect("up");

    assert_eq!(widget.series(), &[2, 7, 2]);
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn pointer_up_while_idle_is_noop() {
    let (mut widget, commits) = build_widget(vec![2, 2, 2]);
    widget.draw().expect("draw");
    let frames_before = widget.renderer().frames_rendered;

    widget.pointer_up().expect("up");

    assert!(commits.borrow().is_empty());
    assert_eq!(widget.renderer().frames_rendered, frames_before);
    assert_eq!(widget.interaction_state(), InteractionState::Idle { hover: None });
}

#[test]
fn commit_without_callback_still_updates_series() {
    let config = ChartWidgetConfig::for_series_len(4);
    let mut widget =
        ChartWidget::new(NullRenderer::default(), config, vec![0; 4]).expect("widget init");

    widget.pointer_down(bar_x(0), value_y(8)).expect("down");
    widget.pointer_move(bar_x(3), value_y(8)).expect("move");
    widget.pointer_up().expect("up");

    assert_eq!(widget.series(), &[8, 8, 8, 8]);
    assert_eq!(widget.renderer().full_frames_rendered, 3);
}

#[test]
fn pointer_down_past_the_bars_does_not_start_a_drag() {
    let (mut widget, commits) = build_widget(vec![1, 1]);

    widget.pointer_down(bar_x(5), value_y(3)).expect("down");
    widget.pointer_up().expect("up");

    assert_eq!(widget.interaction_mode(), InteractionMode::Idle);
    assert!(commits.borrow().is_empty());
}

#[test]
fn non_finite_pointer_positions_are_ignored() {
    let (mut widget, _commits) = build_widget(vec![1, 1]);

    widget.pointer_down(f64::NAN, 3.0).expect("nan down");
    assert_eq!(widget.interaction_mode(), InteractionMode::Idle);

    widget.pointer_down(bar_x(0), value_y(3)).expect("down");
    widget.pointer_move(f64::INFINITY, 0.0).expect("inf move");
    assert_eq!(widget.drag_session().map(|s| s.span), Some(DragSpan::single(0)));
}
