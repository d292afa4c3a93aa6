use range_chart::ChartError;
use range_chart::animation::{AnimationConfig, SupersededTweenPolicy};
use range_chart::api::{ChartWidget, ChartWidgetConfig};
use range_chart::core::{BarGeometry, Viewport};
use range_chart::render::NullRenderer;

#[test]
fn series_sized_config_fits_every_bar() {
    let config = ChartWidgetConfig::for_series_len(56);

    assert_eq!(config.viewport, Viewport::new(728, 50));
    assert_eq!(config.geometry, BarGeometry::default());
    assert_eq!(config.animation, AnimationConfig::default());
    config.validate().expect("valid");
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartWidgetConfig::new(Viewport::new(300, 60))
        .with_geometry(BarGeometry::default().with_bar_size(20.0, 2.0).with_hours_limit(12))
        .with_tween_duration_ms(120.0)
        .with_superseded_tween_policy(SupersededTweenPolicy::Cancel);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartWidgetConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed, config);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let parsed = ChartWidgetConfig::from_json_str(
        r#"{ "viewport": { "width": 91, "height": 50 }, "geometry": { "hours_limit": 4 } }"#,
    )
    .expect("parse");

    assert_eq!(parsed.geometry.hours_limit, 4);
    assert_eq!(parsed.geometry.bar_width_px, 12.0);
    assert_eq!(parsed.animation.tween_duration_ms, 200.0);
    assert_eq!(
        parsed.animation.superseded_tween_policy,
        SupersededTweenPolicy::Keep
    );
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = ChartWidgetConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn widget_rejects_invalid_setup() {
    let zero_viewport = ChartWidgetConfig::new(Viewport::new(0, 50));
    assert!(matches!(
        ChartWidget::new(NullRenderer::default(), zero_viewport, vec![1]),
        Err(ChartError::InvalidViewport { .. })
    ));

    let zero_limit = ChartWidgetConfig::for_series_len(2)
        .with_geometry(BarGeometry::default().with_hours_limit(0));
    assert!(matches!(
        ChartWidget::new(NullRenderer::default(), zero_limit, vec![0, 0]),
        Err(ChartError::InvalidGeometry(_))
    ));

    let negative_tween = ChartWidgetConfig::for_series_len(2).with_tween_duration_ms(-1.0);
    assert!(ChartWidget::new(NullRenderer::default(), negative_tween, vec![0, 0]).is_err());

    assert!(matches!(
        ChartWidget::new(
            NullRenderer::default(),
            ChartWidgetConfig::for_series_len(2),
            vec![3, 9]
        ),
        Err(ChartError::ValueOutOfRange { index: 1, .. })
    ));
}

#[test]
fn custom_hours_limit_changes_value_mapping() {
    let geometry = BarGeometry::default()
        .with_hours_limit(4)
        .with_bar_height(40.0);
    let config = ChartWidgetConfig::new(Viewport::new(65, 60)).with_geometry(geometry);
    let mut widget =
        ChartWidget::new(NullRenderer::default(), config, vec![0; 5]).expect("widget init");

    // 10px per hour: y=15 is one step down from the top.
    widget.pointer_down(1.0, 15.0).expect("down");
    widget.pointer_up().expect("up");

    assert_eq!(widget.series(), &[3, 0, 0, 0, 0]);
}
