//! Layout negotiation between the plot area and its docked components.
//!
//! Components are carved off the padded canvas in a fixed priority order
//! (legend, scrollbar, category axis, value axis); whatever remains is the
//! plot area. See [`negotiate_layout`].

pub mod component;
pub mod negotiator;
pub mod text_metrics;

pub use component::{
    AXIS_LABEL_OFFSET_PX, AXIS_TICK_LENGTH_PX, AxisComponent, COMPONENT_GAP_PX, ComponentRole,
    ComponentSlot, DEFAULT_LABEL_FONT_SIZE_PX, LEGEND_ITEM_SPACING_PX, LEGEND_MARKER_GAP_PX,
    LEGEND_MARKER_SIZE_PX, LEGEND_ROW_HEIGHT_PX, LayoutComponent, LayoutConstraints,
    LegendComponent, LegendItemPlacement, ScrollbarComponent,
};
pub use negotiator::{
    DEFAULT_OUTER_PADDING_PX, LayoutRequest, LayoutSnapshot, MAX_NEGOTIATION_PASSES, PlacedAxis,
    PlacedComponent, PlacedScrollbar, negotiate_layout,
};
pub use text_metrics::{estimate_label_text_width_px, max_label_width_px};
