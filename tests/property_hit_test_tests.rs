use proptest::prelude::*;
use range_chart::core::{BarGeometry, SurfacePoint, Viewport};

proptest! {
    #[test]
    fn hit_test_never_leaves_the_surface(
        x in -1.0e9f64..1.0e9,
        y in -1.0e9f64..1.0e9,
        width in 1u32..4_000,
        height in 1u32..400,
        hours_limit in 1u8..=24
    ) {
        let geometry = BarGeometry::default().with_hours_limit(hours_limit);
        let viewport = Viewport::new(width, height);
        let hit = geometry.hit_test(SurfacePoint::new(x, y), viewport);

        let columns = ((f64::from(width) / geometry.bar_size()).floor() as usize).max(1);
        prop_assert!(hit.index < columns);
        prop_assert!(hit.value <= hours_limit);
    }

    #[test]
    fn higher_pointer_never_means_fewer_hours(
        y in -100.0f64..100.0,
        delta in 0.0f64..50.0
    ) {
        let geometry = BarGeometry::default();
        prop_assert!(geometry.value_at(y - delta) >= geometry.value_at(y));
    }
}
