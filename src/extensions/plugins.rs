use serde::{Deserialize, Serialize};

use crate::core::{BBox, CategoryWindow, ScrollState, Viewport};
use crate::interaction::{InteractionMode, ScrollbarElement};

/// Read-only state snapshot passed to plugin hooks.
///
/// Taken after the triggering update has fully completed, so the scroll
/// state, window and plot box always agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub scroll: ScrollState,
    pub window: Option<CategoryWindow>,
    pub category_count: usize,
    pub filtered_len: usize,
    pub plot: BBox,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataChanged { records_len: usize },
    Resized { width: u32, height: u32 },
    ValueChanged { previous: f64, current: f64 },
    WindowChanged { start: usize, end: usize },
    LayoutChanged,
    DragStarted,
    DragEnded,
    HoverChanged {
        element: ScrollbarElement,
        hovered: bool,
    },
    Rendered,
    Destroyed,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe scrollbar events and read engine context without mutating
/// engine state directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
