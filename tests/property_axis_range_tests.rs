use cartesian_axis_layout::ChartSettings;
use cartesian_axis_layout::api::{AxisRange, StackType, resolve_axis_ranges};
use cartesian_axis_layout::core::{Extent, YAxisExtents};
use proptest::prelude::*;

proptest! {
    #[test]
    fn resolved_range_never_hides_data(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.0f64..1_000_000.0,
        custom_min in proptest::option::of(-2_000_000.0f64..2_000_000.0),
        custom_max in proptest::option::of(-2_000_000.0f64..2_000_000.0)
    ) {
        let extent = Extent::new(min, min + span).expect("valid extent");
        let settings = ChartSettings::default().with_custom_y_range(custom_min, custom_max);
        let (left, right) =
            resolve_axis_ranges(YAxisExtents::new(Some(extent), Some(extent)), &settings);

        for range in [left, right] {
            if let Some(bound) = range.min {
                prop_assert!(bound <= extent.min);
            }
            if let Some(bound) = range.max {
                prop_assert!(bound >= extent.max);
            }
        }
        prop_assert_eq!(left, right);
    }

    #[test]
    fn normalized_stacking_always_yields_unit_range(
        left_min in -1_000.0f64..1_000.0,
        right_min in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        auto_range in any::<bool>(),
        custom_min in proptest::option::of(-5_000.0f64..5_000.0),
        custom_max in proptest::option::of(-5_000.0f64..5_000.0)
    ) {
        let settings = ChartSettings {
            y_axis_min: custom_min,
            y_axis_max: custom_max,
            ..ChartSettings::default()
                .with_auto_range(auto_range)
                .with_stack_type(StackType::Normalized)
        };
        let extents = YAxisExtents::new(
            Some(Extent::new(left_min, left_min + span).expect("valid left")),
            Some(Extent::new(right_min, right_min + span).expect("valid right")),
        );

        let (left, right) = resolve_axis_ranges(extents, &settings);
        prop_assert_eq!(left, AxisRange::NORMALIZED);
        prop_assert_eq!(right, AxisRange::NORMALIZED);
    }

    #[test]
    fn auto_range_always_yields_empty_ranges(
        min in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        custom_min in proptest::option::of(-5_000.0f64..5_000.0),
        custom_max in proptest::option::of(-5_000.0f64..5_000.0)
    ) {
        let settings = ChartSettings {
            y_axis_min: custom_min,
            y_axis_max: custom_max,
            ..ChartSettings::default().with_auto_range(true)
        };
        let extent = Extent::new(min, min + span).expect("valid extent");

        let (left, right) =
            resolve_axis_ranges(YAxisExtents::new(Some(extent), None), &settings);
        prop_assert!(left.is_auto());
        prop_assert!(right.is_auto());
    }
}
