use proptest::prelude::*;
use range_chart::api::{ChartWidget, ChartWidgetConfig};
use range_chart::render::NullRenderer;

proptest! {
    #[test]
    fn commit_only_touches_the_dragged_span(
        values in prop::collection::vec(0u8..=8, 2..40),
        begin_seed in 0usize..1_000,
        end_seed in 0usize..1_000,
        y in -20.0f64..60.0
    ) {
        let len = values.len();
        let begin = begin_seed % len;
        let end = end_seed % len;
        let config = ChartWidgetConfig::for_series_len(len);
        let geometry = config.geometry;
        let mut widget = ChartWidget::new(NullRenderer::default(), config, values.clone())
            .expect("widget init");

        widget.pointer_down(geometry.column_x(begin) + 1.0, y).expect("down");
        widget.pointer_move(geometry.column_x(end) + 1.0, y).expect("move");
        widget.pointer_up().expect("up");

        let painted = geometry.value_at(y);
        let (low, high) = (begin.min(end), begin.max(end));
        for (index, value) in widget.series().iter().enumerate() {
            if (low..=high).contains(&index) {
                prop_assert_eq!(*value, painted);
            } else {
                prop_assert_eq!(*value, values[index]);
            }
        }
    }
}
