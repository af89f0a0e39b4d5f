pub mod bbox;
pub mod datum;
pub mod scroll_state;
pub mod track;
pub mod types;
pub mod value_ticks;
pub mod windowing;

pub use bbox::BBox;
pub use datum::{Datum, category_key_of, parse_records_json};
pub use scroll_state::{ScrollController, ScrollState, ValueChange};
pub use track::{
    DEFAULT_TRACK_THICKNESS_PX, ReservedMargins, ThumbGeometry, TrackGeometry,
    compute_track_geometry,
};
pub use types::{Orientation, Side, Viewport};
pub use value_ticks::{DEFAULT_VALUE_TICK_COUNT, format_tick, nice_step, nice_ticks, tick_step};
pub use windowing::{CategoryWindow, compute_window, filter_records, ordered_categories};
