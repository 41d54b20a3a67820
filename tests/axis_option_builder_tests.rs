use cartesian_axis_layout::api::{
    AxesFormatters, AxisFormatter, AxisPosition, AxisRange, AxisType, CHART_STYLE,
    DimensionTickDecoding, HeuristicRenderingContext, NameLocation, RenderingContext, StackType,
    ThemeColor, XAxisDisplay, XAxisScale, build_dimension_axis, rotate_angle, x_axis_type,
};
use cartesian_axis_layout::core::{AxisValue, ChartModel, Datum, DimensionModel, Extent};
use cartesian_axis_layout::render::LineStrokeStyle;
use cartesian_axis_layout::{ChartSettings, build_axes, build_cartesian_layout};

fn model(numeric: bool) -> ChartModel {
    let dataset = [10.0, 20.0, 30.0]
        .into_iter()
        .map(|x| {
            let mut datum = Datum::new();
            datum.insert("x".to_owned(), AxisValue::Number(x));
            datum.insert("y".to_owned(), AxisValue::Number(x * 3.0));
            datum
        })
        .collect();
    ChartModel::new(dataset, DimensionModel::new("x", numeric))
}

fn dual_axis_model() -> ChartModel {
    model(true)
        .with_left_extent(Extent::new(30.0, 90.0).expect("left extent"))
        .with_right_extent(Extent::new(0.5, 0.9).expect("right extent"))
}

fn echo_formatter() -> AxisFormatter {
    AxisFormatter::new(|value| match value {
        AxisValue::Number(number) => format!("n:{number}"),
        AxisValue::Text(text) => format!("t:{text}"),
        AxisValue::Bool(flag) => format!("b:{flag}"),
        AxisValue::Null => "null".to_owned(),
    })
}

#[test]
fn dimension_axis_type_follows_scale_setting() {
    let cases = [
        (XAxisScale::Timeseries, AxisType::Time),
        (XAxisScale::Linear, AxisType::Value),
        (XAxisScale::Ordinal, AxisType::Category),
        (XAxisScale::Histogram, AxisType::Category),
        (XAxisScale::Log, AxisType::Category),
    ];
    for (scale, expected) in cases {
        assert_eq!(
            x_axis_type(&ChartSettings::default().with_x_axis_scale(scale)),
            expected
        );
    }
}

#[test]
fn boundary_gap_only_on_discrete_and_time_axes() {
    let context = HeuristicRenderingContext::default();
    let formatter = AxisFormatter::plain();

    let value_axis = build_dimension_axis(
        &model(true),
        &ChartSettings::default().with_x_axis_scale(XAxisScale::Linear),
        &formatter,
        &context,
    );
    assert_eq!(value_axis.boundary_gap, None);

    for scale in [XAxisScale::Timeseries, XAxisScale::Ordinal] {
        let axis = build_dimension_axis(
            &model(true),
            &ChartSettings::default().with_x_axis_scale(scale),
            &formatter,
            &context,
        );
        assert_eq!(axis.boundary_gap, Some([0.02, 0.02]));
    }
}

#[test]
fn rotation_follows_display_mode() {
    let angle = |display| rotate_angle(&ChartSettings::default().with_x_axis_display(display));

    assert_eq!(angle(XAxisDisplay::Rotate45), Some(45.0));
    assert_eq!(angle(XAxisDisplay::Rotate90), Some(90.0));
    assert_eq!(angle(XAxisDisplay::Shown), None);
    assert_eq!(angle(XAxisDisplay::Compact), None);
    assert_eq!(angle(XAxisDisplay::Hidden), None);
    assert_eq!(angle(XAxisDisplay::Unrecognized("rotate-30".to_owned())), None);
}

#[test]
fn numeric_dimension_ticks_are_reparsed_as_integers() {
    let axis = build_dimension_axis(
        &model(true),
        &ChartSettings::default(),
        &echo_formatter(),
        &HeuristicRenderingContext::default(),
    );

    assert_eq!(axis.axis_label.formatter.decoding, DimensionTickDecoding::Integer);
    assert_eq!(axis.axis_label.formatter.format("42"), " n:42 ");
    assert_eq!(axis.axis_label.formatter.format("7.9"), " n:7 ");
    assert_eq!(axis.axis_label.formatter.format("n/a"), " t:n/a ");
}

#[test]
fn text_dimension_ticks_pass_through() {
    let axis = build_dimension_axis(
        &model(false),
        &ChartSettings::default(),
        &echo_formatter(),
        &HeuristicRenderingContext::default(),
    );

    assert_eq!(axis.axis_label.formatter.decoding, DimensionTickDecoding::Text);
    assert_eq!(axis.axis_label.formatter.format("42"), " t:42 ");
}

#[test]
fn time_dimension_ticks_are_normalized_before_formatting() {
    let axis = build_dimension_axis(
        &model(true),
        &ChartSettings::default().with_x_axis_scale(XAxisScale::Timeseries),
        &echo_formatter(),
        &HeuristicRenderingContext::default(),
    );

    assert_eq!(
        axis.axis_label.formatter.decoding,
        DimensionTickDecoding::Timestamp
    );
    assert_eq!(
        axis.axis_label.formatter.format("1704067200000"),
        " t:2024-01-01T00:00:00 "
    );
    assert_eq!(
        axis.axis_label.formatter.format("2024-02-29"),
        " t:2024-02-29T00:00:00 "
    );
}

#[test]
fn dimension_axis_carries_title_and_styling() {
    let context = HeuristicRenderingContext::default();
    let settings = ChartSettings::default()
        .with_x_axis_title("Created At")
        .with_x_axis_display(XAxisDisplay::Rotate45);
    let axis = build_dimension_axis(&model(true), &settings, &AxisFormatter::plain(), &context);

    assert_eq!(axis.name.name.as_deref(), Some("Created At"));
    assert_eq!(axis.name.name_location, NameLocation::Middle);
    assert_eq!(axis.name.name_text_style.font_size, CHART_STYLE.axis_name.size);
    assert_eq!(axis.name.name_text_style.font_family, "Lato");
    assert!(axis.name.name_gap > CHART_STYLE.axis_name_padding);
    assert!(!axis.show_axis_tick);
    assert!(!axis.split_line.show);
    assert!(axis.axis_label.show);
    assert_eq!(axis.axis_label.rotate, Some(45.0));
    assert!(axis.axis_label.style.hide_overlap);
    assert_eq!(
        axis.axis_line.color,
        context.color(ThemeColor::TextDark)
    );
}

#[test]
fn hidden_dimension_axis_hides_labels() {
    let axis = build_dimension_axis(
        &model(true),
        &ChartSettings::default().with_x_axis_display(XAxisDisplay::Hidden),
        &AxisFormatter::plain(),
        &HeuristicRenderingContext::default(),
    );

    assert!(!axis.axis_label.show);
    assert_eq!(axis.name.name_gap, CHART_STYLE.axis_name_padding);
}

#[test]
fn metric_axes_need_both_formatter_and_extent() {
    let context = HeuristicRenderingContext::default();
    let settings = ChartSettings::default();
    let bottom = AxisFormatter::plain();

    let both = build_axes(
        &dual_axis_model(),
        &settings,
        &AxesFormatters::new(bottom.clone())
            .with_left(AxisFormatter::plain())
            .with_right(AxisFormatter::plain()),
        &context,
    );
    let positions: Vec<_> = both.y_axis.iter().map(|axis| axis.position).collect();
    assert_eq!(positions, vec![AxisPosition::Left, AxisPosition::Right]);

    let right_only = build_axes(
        &dual_axis_model(),
        &settings,
        &AxesFormatters::new(bottom.clone()).with_right(AxisFormatter::plain()),
        &context,
    );
    assert_eq!(right_only.y_axis.len(), 1);
    assert!(right_only.metric_axis(AxisPosition::Right).is_some());

    let no_extents = build_axes(
        &model(true),
        &settings,
        &AxesFormatters::new(bottom)
            .with_left(AxisFormatter::plain())
            .with_right(AxisFormatter::plain()),
        &context,
    );
    assert!(no_extents.y_axis.is_empty());
}

#[test]
fn metric_axis_carries_range_gap_and_dashed_split_line() {
    let context = HeuristicRenderingContext::default();
    let left_formatter = AxisFormatter::new(|value| format!("{value}%"));
    let settings = ChartSettings::default()
        .with_custom_y_range(Some(0.0), Some(50.0))
        .with_y_axis_title("Share");
    let axes = build_axes(
        &dual_axis_model(),
        &settings,
        &AxesFormatters::new(AxisFormatter::plain()).with_left(left_formatter.clone()),
        &context,
    );

    let left = axes.metric_axis(AxisPosition::Left).expect("left axis");
    assert_eq!(
        left.range,
        AxisRange {
            min: Some(0.0),
            max: None
        }
    );
    assert_eq!(left.name.name.as_deref(), Some("Share"));
    assert!(left.name.name_gap > CHART_STYLE.axis_name_padding);
    assert!(left.split_line.show);
    let line_style = left.split_line.line_style.expect("split line style");
    assert_eq!(line_style.stroke, LineStrokeStyle::Dashed { dash_px: 5.0 });
    assert_eq!(line_style.color, context.color(ThemeColor::Border));
    assert_eq!(left.axis_label.formatter, left_formatter);
    assert_eq!(
        left.axis_label.formatter.format(&AxisValue::Number(12.0)),
        "12%"
    );
}

#[test]
fn normalized_metric_axes_use_unit_range() {
    let axes = build_axes(
        &dual_axis_model(),
        &ChartSettings::default().with_stack_type(StackType::Normalized),
        &AxesFormatters::new(AxisFormatter::plain())
            .with_left(AxisFormatter::plain())
            .with_right(AxisFormatter::plain()),
        &HeuristicRenderingContext::default(),
    );

    assert!(axes.y_axis.iter().all(|axis| axis.range == AxisRange::NORMALIZED));
}

#[test]
fn layout_is_deterministic() {
    let context = HeuristicRenderingContext::default();
    let settings = ChartSettings::default()
        .with_custom_y_range(Some(-10.0), Some(200.0))
        .with_x_axis_display(XAxisDisplay::Rotate45)
        .with_y_axis_labels_enabled(true)
        .with_y_axis_title("Total")
        .with_x_axis_title("Bucket");
    let formatters = AxesFormatters::new(AxisFormatter::plain())
        .with_left(AxisFormatter::plain())
        .with_right(AxisFormatter::plain());
    let model = dual_axis_model();

    let first = build_cartesian_layout(&model, &settings, &formatters, &context);
    let second = build_cartesian_layout(&model, &settings, &formatters, &context);

    assert_eq!(first, second);
    assert_eq!(
        first.to_json_pretty().expect("serialize first"),
        second.to_json_pretty().expect("serialize second")
    );
    assert_eq!(first.grid.left, first.grid.right);
}

#[test]
fn empty_chart_still_produces_a_layout() {
    let model = ChartModel::new(Vec::new(), DimensionModel::new("x", false));
    let layout = build_cartesian_layout(
        &model,
        &ChartSettings::default().with_x_axis_display(XAxisDisplay::Rotate90),
        &AxesFormatters::new(AxisFormatter::plain()),
        &HeuristicRenderingContext::default(),
    );

    assert!(layout.axes.y_axis.is_empty());
    assert_eq!(layout.axes.x_axis.name.name_gap, CHART_STYLE.axis_name_padding);
    let json = layout.to_json_pretty().expect("serialize layout");
    assert!(json.contains("\"x_axis\""));
    assert!(json.contains("\"grid\""));
}
