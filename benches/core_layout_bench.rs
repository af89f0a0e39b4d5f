use chart_scroll::api::{ChartEngine, ChartEngineConfig, ScrollbarConfig};
use chart_scroll::core::{
    BBox, Datum, Orientation, Side, Viewport, compute_window, filter_records, ordered_categories,
};
use chart_scroll::layout::{
    AxisComponent, ComponentRole, LayoutRequest, LegendComponent, ScrollbarComponent,
    negotiate_layout,
};
use chart_scroll::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sales_records(count: usize) -> Vec<Datum> {
    (0..count)
        .map(|index| {
            Datum::new()
                .with_field("subCategory", format!("Cat {:04}", index / 3))
                .with_field("sales", 50.0 + (index % 50) as f64)
                .with_field("segment", format!("S{}", index % 3))
        })
        .collect()
}

fn bench_negotiate_layout(c: &mut Criterion) {
    let mut request = LayoutRequest::new(BBox::new(0.0, 0.0, 1280.0, 720.0));
    request.legend = Some(LegendComponent::new(
        Side::Bottom,
        (0..6).map(|index| format!("Series {index}")).collect(),
    ));
    request.scrollbar = Some(ScrollbarComponent::new(Orientation::Horizontal));
    request.category_axis = Some(
        AxisComponent::new(
            ComponentRole::CategoryAxis,
            Side::Bottom,
            (0..40).map(|index| format!("Category {index}")).collect(),
        )
        .with_auto_rotate(true),
    );
    request.value_axis = Some(AxisComponent::new(
        ComponentRole::ValueAxis,
        Side::Left,
        vec!["0".to_owned(), "500".to_owned(), "1000".to_owned()],
    ));

    c.bench_function("negotiate_layout_full_request", |b| {
        b.iter(|| {
            let _ = negotiate_layout(black_box(&request));
        })
    });
}

fn bench_window_filter_30k(c: &mut Criterion) {
    let records = sales_records(30_000);
    let categories = ordered_categories(&records, |record| record.category_key("subCategory"));

    c.bench_function("window_filter_30k", |b| {
        b.iter(|| {
            let window = compute_window(categories.len(), black_box(0.37), 0.05).expect("window");
            let _ = filter_records(&records, &categories, window, |record| {
                record.category_key("subCategory")
            });
        })
    });
}

fn bench_engine_set_value(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1280, 720), "subCategory", "sales")
        .with_series_field("segment")
        .with_scrollbar(ScrollbarConfig::new(Orientation::Horizontal));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(sales_records(3_000));

    let mut step = 0_u32;
    c.bench_function("engine_set_value_3k_records", |b| {
        b.iter(|| {
            step = (step + 1) % 100;
            let _ = engine.set_value(black_box(f64::from(step) / 100.0));
        })
    });
}

criterion_group!(
    benches,
    bench_negotiate_layout,
    bench_window_filter_30k,
    bench_engine_set_value
);
criterion_main!(benches);
