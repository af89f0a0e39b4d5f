use chart_scroll::api::{ChartEngine, ChartEngineConfig, ScrollbarConfig};
use chart_scroll::core::{
    BBox, Datum, Orientation, ReservedMargins, ScrollState, Side, Viewport, compute_track_geometry,
    compute_window, filter_records, ordered_categories,
};
use chart_scroll::layout::{
    AxisComponent, ComponentRole, LayoutRequest, LegendComponent, ScrollbarComponent,
    negotiate_layout,
};
use chart_scroll::render::NullRenderer;
use proptest::prelude::*;

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Top),
        Just(Side::Bottom),
        Just(Side::Left),
        Just(Side::Right),
    ]
}

proptest! {
    #[test]
    fn engine_value_stays_in_unit_range(values in proptest::collection::vec(-10.0f64..10.0, 1..16)) {
        let config = ChartEngineConfig::new(Viewport::new(360, 300), "subCategory", "sales")
            .with_scrollbar(ScrollbarConfig::new(Orientation::Horizontal));
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_data(
            (1..=30)
                .map(|index| {
                    Datum::new()
                        .with_field("subCategory", format!("Cat {index:02}"))
                        .with_field("sales", f64::from(index))
                })
                .collect(),
        );

        for value in values {
            engine.set_value(value);
            let current = engine.value();
            prop_assert!((0.0..=1.0).contains(&current));
            prop_assert_eq!(current, value.clamp(0.0, 1.0));

            let window = engine.category_window().expect("window");
            prop_assert!(window.end_index < engine.category_count());
            prop_assert_eq!(engine.visible_categories().len(), window.size());
        }
    }

    #[test]
    fn window_stays_inside_category_range(
        count in 1usize..500,
        ratio in -1.0f64..2.0,
        thumb_ratio in 0.0f64..1.5
    ) {
        let window = compute_window(count, ratio, thumb_ratio).expect("window");
        prop_assert!(window.start_index <= window.end_index);
        prop_assert!(window.end_index < count);
        prop_assert!(window.size() >= 1);
    }

    #[test]
    fn window_start_is_monotonic_in_ratio(
        count in 1usize..500,
        lhs in 0.0f64..=1.0,
        rhs in 0.0f64..=1.0,
        thumb_ratio in 0.01f64..=1.0
    ) {
        let (low, high) = if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) };
        let first = compute_window(count, low, thumb_ratio).expect("window");
        let second = compute_window(count, high, thumb_ratio).expect("window");
        prop_assert!(first.start_index <= second.start_index);
        prop_assert_eq!(first.size(), second.size());
    }

    #[test]
    fn filtered_records_match_window_in_input_order(
        keys in proptest::collection::vec(0u8..12, 0..80),
        ratio in 0.0f64..=1.0,
        thumb_ratio in 0.05f64..=1.0
    ) {
        let categories = ordered_categories(&keys, |key| Some(key.to_string()));
        let Some(window) = compute_window(categories.len(), ratio, thumb_ratio) else {
            prop_assert!(keys.is_empty());
            return Ok(());
        };

        let filtered = filter_records(&keys, &categories, window, |key| Some(key.to_string()));
        let expected: Vec<u8> = keys
            .iter()
            .copied()
            .filter(|key| {
                categories
                    .get_index_of(&key.to_string())
                    .is_some_and(|index| window.contains(index))
            })
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn thumb_stays_inside_track(
        width in 0.0f64..1_000.0,
        ratio in 0.0f64..=1.0,
        thumb_ratio in 0.0f64..=1.0
    ) {
        let track = compute_track_geometry(
            BBox::new(0.0, 0.0, width, 8.0),
            Orientation::Horizontal,
            ReservedMargins::default(),
            8.0,
        );
        let thumb = track.thumb(ScrollState::new(ratio, thumb_ratio));
        prop_assert!(thumb.offset >= 0.0);
        prop_assert!(thumb.end() <= track.length + 1e-9);
    }

    #[test]
    fn negotiated_boxes_never_collide(
        width in 40.0f64..1_200.0,
        height in 40.0f64..900.0,
        legend_side in side_strategy(),
        vertical in any::<bool>(),
        label_count in 0usize..6
    ) {
        let mut request = LayoutRequest::new(BBox::new(0.0, 0.0, width, height));
        let legend_labels = (0..label_count).map(|index| format!("Series {index}")).collect();
        request.legend = Some(LegendComponent::new(legend_side, legend_labels));
        let (orientation, category_side, value_side) = if vertical {
            (Orientation::Vertical, Side::Left, Side::Bottom)
        } else {
            (Orientation::Horizontal, Side::Bottom, Side::Left)
        };
        request.scrollbar = Some(ScrollbarComponent::new(orientation));
        request.category_axis = Some(
            AxisComponent::new(
                ComponentRole::CategoryAxis,
                category_side,
                (1..=8).map(|index| format!("Category {index}")).collect(),
            )
            .with_auto_rotate(true),
        );
        request.value_axis = Some(AxisComponent::new(
            ComponentRole::ValueAxis,
            value_side,
            vec!["0".to_owned(), "500".to_owned(), "1000".to_owned()],
        ));

        let layout = negotiate_layout(&request);
        let placed = layout.components();
        for (index, lhs) in placed.iter().enumerate() {
            prop_assert!(!lhs.bbox.collide(layout.plot));
            for rhs in placed.iter().skip(index + 1) {
                prop_assert!(!lhs.bbox.collide(rhs.bbox));
            }
        }
        prop_assert!(layout.plot.width() >= 0.0);
        prop_assert!(layout.plot.height() >= 0.0);
        if let Some(track) = layout.track() {
            prop_assert!(track.length >= 0.0);
        }
    }
}
