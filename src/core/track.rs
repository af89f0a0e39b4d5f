use serde::{Deserialize, Serialize};

use super::{BBox, Orientation, ScrollState};

/// Fixed cross-axis size of a scrollbar track in pixels.
pub const DEFAULT_TRACK_THICKNESS_PX: f64 = 8.0;

/// Space held back around the track for siblings.
///
/// `before`/`after` are measured along the track direction (e.g. value-axis
/// labels to the left of a horizontal track). `edge` is measured from the
/// trailing edge of the outer box (bottom for horizontal, right for vertical).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReservedMargins {
    pub before: f64,
    pub after: f64,
    pub edge: f64,
}

impl ReservedMargins {
    #[must_use]
    pub const fn along(before: f64, after: f64) -> Self {
        Self {
            before,
            after,
            edge: 0.0,
        }
    }
}

/// Derived scrollbar rail geometry for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub orientation: Orientation,
    pub length: f64,
    pub thickness: f64,
    pub x: f64,
    pub y: f64,
}

impl TrackGeometry {
    #[must_use]
    pub fn bbox(self) -> BBox {
        match self.orientation {
            Orientation::Horizontal => BBox::from_rect(self.x, self.y, self.length, self.thickness),
            Orientation::Vertical => BBox::from_rect(self.x, self.y, self.thickness, self.length),
        }
    }

    /// A track with no length cannot be interacted with.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        self.length > 0.0
    }

    /// Projects a canvas point onto the track direction.
    #[must_use]
    pub fn along(self, x: f64, y: f64) -> f64 {
        self.orientation.main_axis(x, y) - self.orientation.main_axis(self.x, self.y)
    }

    #[must_use]
    pub fn thumb(self, state: ScrollState) -> ThumbGeometry {
        if !self.is_interactive() {
            return ThumbGeometry {
                offset: 0.0,
                length: 0.0,
            };
        }
        let length = (self.length * state.thumb_ratio()).clamp(0.0, self.length);
        let offset = state.ratio() * (self.length - length);
        ThumbGeometry { offset, length }
    }

    /// Canvas-space box of the thumb.
    #[must_use]
    pub fn thumb_bbox(self, thumb: ThumbGeometry) -> BBox {
        match self.orientation {
            Orientation::Horizontal => {
                BBox::from_rect(self.x + thumb.offset, self.y, thumb.length, self.thickness)
            }
            Orientation::Vertical => {
                BBox::from_rect(self.x, self.y + thumb.offset, self.thickness, thumb.length)
            }
        }
    }
}

/// Thumb placement along its track, relative to the track start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbGeometry {
    pub offset: f64,
    pub length: f64,
}

impl ThumbGeometry {
    #[must_use]
    pub fn end(self) -> f64 {
        self.offset + self.length
    }

    /// Pixel range the thumb can travel along a track of `track_length`.
    #[must_use]
    pub fn travel(self, track_length: f64) -> f64 {
        (track_length - self.length).max(0.0)
    }
}

/// Computes the scrollbar rail inside `outer`.
///
/// Pure function of its inputs, so the negotiator can call it repeatedly while
/// it converges. A zero extent along the track direction yields `length = 0`.
#[must_use]
pub fn compute_track_geometry(
    outer: BBox,
    orientation: Orientation,
    reserved: ReservedMargins,
    thickness: f64,
) -> TrackGeometry {
    let before = reserved.before.max(0.0);
    let after = reserved.after.max(0.0);
    let edge = reserved.edge.max(0.0);
    let thickness = thickness.max(0.0);

    match orientation {
        Orientation::Horizontal => {
            let length = (outer.width() - before - after).max(0.0);
            let y = (outer.max_y - edge - thickness).max(outer.min_y);
            TrackGeometry {
                orientation,
                length,
                thickness,
                x: outer.min_x + before.min(outer.width()),
                y,
            }
        }
        Orientation::Vertical => {
            let length = (outer.height() - before - after).max(0.0);
            let x = (outer.max_x - edge - thickness).max(outer.min_x);
            TrackGeometry {
                orientation,
                length,
                thickness,
                x,
                y: outer.min_y + before.min(outer.height()),
            }
        }
    }
}
