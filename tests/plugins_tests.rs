use std::cell::RefCell;
use std::rc::Rc;

use chart_scroll::api::{ChartEngine, ChartEngineConfig, ScrollbarConfig};
use chart_scroll::core::{CategoryWindow, Datum, Orientation, Viewport};
use chart_scroll::extensions::{ChartPlugin, PluginContext, PluginEvent};
use chart_scroll::interaction::{InteractionMode, ScrollbarElement};
use chart_scroll::render::NullRenderer;

const TRACK_Y: f64 = 388.0;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<PluginEvent>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<PluginEvent>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, _context: PluginContext) {
        self.events.borrow_mut().push(event);
    }
}

/// Captures the context delivered alongside each value change.
struct ContextPlugin {
    seen: Rc<RefCell<Vec<(f64, Option<CategoryWindow>, usize)>>>,
}

impl ChartPlugin for ContextPlugin {
    fn id(&self) -> &str {
        "context"
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        if let PluginEvent::ValueChanged { current, .. } = event {
            self.seen
                .borrow_mut()
                .push((current, context.window, context.filtered_len));
        }
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::DataChanged { .. } => "data",
        PluginEvent::Resized { .. } => "resize",
        PluginEvent::ValueChanged { .. } => "value",
        PluginEvent::WindowChanged { .. } => "window",
        PluginEvent::LayoutChanged => "layout",
        PluginEvent::DragStarted => "drag_start",
        PluginEvent::DragEnded => "drag_end",
        PluginEvent::HoverChanged { .. } => "hover",
        PluginEvent::Rendered => "rendered",
        PluginEvent::Destroyed => "destroyed",
    }
}

fn sales_records(count: usize) -> Vec<Datum> {
    (1..=count)
        .map(|index| {
            Datum::new()
                .with_field("subCategory", format!("Cat {index:02}"))
                .with_field("sales", 81.0 + (index % 19) as f64)
        })
        .collect()
}

fn horizontal_engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(500, 400), "subCategory", "sales")
        .with_scrollbar(ScrollbarConfig::new(Orientation::Horizontal));
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn plugin_receives_data_then_window_events() {
    let mut engine = horizontal_engine();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.set_data(sales_records(20));
    engine.render().expect("render");

    let kinds: Vec<&str> = events.borrow().iter().map(event_kind).collect();
    assert_eq!(kinds.first().copied(), Some("data"));
    assert_eq!(kinds.get(1).copied(), Some("window"));
    assert_eq!(kinds.last().copied(), Some("rendered"));
    assert_eq!(
        events.borrow()[0],
        PluginEvent::DataChanged { records_len: 20 }
    );
    assert_eq!(
        events.borrow()[1],
        PluginEvent::WindowChanged { start: 0, end: 13 }
    );
}

#[test]
fn value_change_is_reported_once_before_window_change() {
    let mut engine = horizontal_engine();
    engine.set_data(sales_records(20));
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.set_value(1.0);
    engine.set_value(1.0);
    engine.set_value(5.0);

    let recorded = events.borrow();
    let value_events = recorded
        .iter()
        .filter(|event| matches!(event, PluginEvent::ValueChanged { .. }))
        .count();
    assert_eq!(value_events, 1);
    assert_eq!(
        recorded[0],
        PluginEvent::ValueChanged {
            previous: 0.0,
            current: 1.0
        }
    );
    assert_eq!(recorded[1], PluginEvent::WindowChanged { start: 6, end: 19 });
}

#[test]
fn plugin_context_already_reflects_new_window() {
    let mut engine = horizontal_engine();
    engine.set_data(sales_records(20));
    let seen = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(ContextPlugin { seen: seen.clone() }))
        .expect("register plugin");

    engine.set_value(1.0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let (current, window, filtered_len) = seen[0];
    assert_eq!(current, 1.0);
    assert_eq!(window.map(|window| window.start_index), Some(6));
    assert_eq!(filtered_len, 14);
}

#[test]
fn drag_and_hover_events_follow_pointer() {
    let mut engine = horizontal_engine();
    engine.set_data(sales_records(20));
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.pointer_down(100.0, TRACK_Y);
    engine.pointer_move(150.0, TRACK_Y);
    engine.pointer_up(150.0, TRACK_Y);

    let recorded = events.borrow();
    assert!(recorded.contains(&PluginEvent::HoverChanged {
        element: ScrollbarElement::Thumb,
        hovered: true
    }));
    let kinds: Vec<&str> = recorded.iter().map(event_kind).collect();
    let start = kinds
        .iter()
        .position(|kind| *kind == "drag_start")
        .expect("drag start");
    let value = kinds
        .iter()
        .position(|kind| *kind == "value")
        .expect("value change");
    let end = kinds
        .iter()
        .position(|kind| *kind == "drag_end")
        .expect("drag end");
    assert!(start < value && value < end);
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let mut engine = horizontal_engine();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    assert!(
        engine
            .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
            .is_err()
    );
    assert!(
        engine
            .register_plugin(Box::new(RecordingPlugin::new("", events.clone())))
            .is_err()
    );
    assert_eq!(engine.plugin_count(), 1);

    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));
    assert!(!engine.has_plugin("recorder"));
}

#[test]
fn destroy_notifies_then_detaches() {
    let mut engine = horizontal_engine();
    engine.set_data(sales_records(20));
    engine.set_value(0.5);
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.pointer_down(250.0, TRACK_Y);
    assert_eq!(engine.interaction_mode(), InteractionMode::Dragging);

    engine.destroy();
    assert!(engine.is_destroyed());
    assert_eq!(engine.plugin_count(), 0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(engine.value(), 0.0);
    assert_eq!(events.borrow().last(), Some(&PluginEvent::Destroyed));

    let recorded = events.borrow().len();
    engine.pointer_move(400.0, TRACK_Y);
    engine.pointer_down(480.0, TRACK_Y);
    assert_eq!(engine.value(), 0.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(events.borrow().len(), recorded);
}

#[test]
fn set_data_after_destroy_reattaches_input() {
    let mut engine = horizontal_engine();
    engine.set_data(sales_records(20));
    engine.destroy();

    engine.set_data(sales_records(20));
    assert!(!engine.is_destroyed());
    engine.pointer_down(480.0, TRACK_Y);
    assert_eq!(engine.value(), 1.0);
}

#[test]
fn resize_reports_size_before_window() {
    let mut engine = horizontal_engine();
    engine.set_data(sales_records(20));
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.resize(360, 400).expect("resize");

    let recorded = events.borrow();
    assert_eq!(
        recorded[0],
        PluginEvent::Resized {
            width: 360,
            height: 400
        }
    );
    assert_eq!(recorded[1], PluginEvent::WindowChanged { start: 0, end: 8 });
    assert!(recorded.contains(&PluginEvent::LayoutChanged));
}
