use serde::{Deserialize, Serialize};

use super::Side;

/// Axis-aligned rectangle in canvas pixels.
///
/// Boxes are plain values: every layout pass publishes fresh ones instead of
/// editing the previous pass in place. Constructors normalize so that
/// `min <= max` always holds; a box may have zero width or height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    #[must_use]
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width.max(0.0), y + height.max(0.0))
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        (self.min_x + self.max_x) * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        (self.min_y + self.max_y) * 0.5
    }

    /// Returns `true` when the box has no area.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Strict interior overlap test. Boxes that only share an edge, and
    /// zero-area boxes, never collide.
    #[must_use]
    pub fn collide(self, other: Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Shrinks every edge by `amount`, collapsing onto the center when the
    /// box is too small.
    #[must_use]
    pub fn inset(self, amount: f64) -> Self {
        let amount = amount.max(0.0);
        let half_w = self.width() * 0.5;
        let half_h = self.height() * 0.5;
        let dx = amount.min(half_w);
        let dy = amount.min(half_h);
        Self::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x - dx,
            self.max_y - dy,
        )
    }

    /// Grows the box by `amount` on one side.
    #[must_use]
    pub fn expand_toward(self, side: Side, amount: f64) -> Self {
        let amount = amount.max(0.0);
        match side {
            Side::Top => Self::new(self.min_x, self.min_y - amount, self.max_x, self.max_y),
            Side::Bottom => Self::new(self.min_x, self.min_y, self.max_x, self.max_y + amount),
            Side::Left => Self::new(self.min_x - amount, self.min_y, self.max_x, self.max_y),
            Side::Right => Self::new(self.min_x, self.min_y, self.max_x + amount, self.max_y),
        }
    }

    /// Splits a strip of `extent` pixels off `side`, then removes a further
    /// `gap` pixels. Returns `(strip, remaining)`.
    ///
    /// Both results stay inside `self`; when `extent + gap` exceeds the
    /// available size the remaining box collapses to zero extent on the far
    /// side instead of going negative.
    #[must_use]
    pub fn carve(self, side: Side, extent: f64, gap: f64) -> (Self, Self) {
        let extent = extent.max(0.0);
        let gap = gap.max(0.0);
        match side {
            Side::Top => {
                let strip_max = (self.min_y + extent).min(self.max_y);
                let rest_min = (strip_max + gap).min(self.max_y);
                (
                    Self::new(self.min_x, self.min_y, self.max_x, strip_max),
                    Self::new(self.min_x, rest_min, self.max_x, self.max_y),
                )
            }
            Side::Bottom => {
                let strip_min = (self.max_y - extent).max(self.min_y);
                let rest_max = (strip_min - gap).max(self.min_y);
                (
                    Self::new(self.min_x, strip_min, self.max_x, self.max_y),
                    Self::new(self.min_x, self.min_y, self.max_x, rest_max),
                )
            }
            Side::Left => {
                let strip_max = (self.min_x + extent).min(self.max_x);
                let rest_min = (strip_max + gap).min(self.max_x);
                (
                    Self::new(self.min_x, self.min_y, strip_max, self.max_y),
                    Self::new(rest_min, self.min_y, self.max_x, self.max_y),
                )
            }
            Side::Right => {
                let strip_min = (self.max_x - extent).max(self.min_x);
                let rest_max = (strip_min - gap).max(self.min_x);
                (
                    Self::new(strip_min, self.min_y, self.max_x, self.max_y),
                    Self::new(self.min_x, self.min_y, rest_max, self.max_y),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BBox;
    use crate::core::Side;

    #[test]
    fn carve_bottom_strip_and_gap() {
        let outer = BBox::new(8.0, 8.0, 492.0, 392.0);
        let (strip, rest) = outer.carve(Side::Bottom, 8.0, 8.0);
        assert_eq!(strip, BBox::new(8.0, 384.0, 492.0, 392.0));
        assert_eq!(rest, BBox::new(8.0, 8.0, 492.0, 376.0));
    }

    #[test]
    fn carve_collapses_instead_of_going_negative() {
        let outer = BBox::new(0.0, 0.0, 10.0, 10.0);
        let (strip, rest) = outer.carve(Side::Right, 30.0, 8.0);
        assert_eq!(strip, outer);
        assert_eq!(rest.width(), 0.0);
        assert!(rest.is_degenerate());
        assert!(!strip.collide(rest));
    }

    #[test]
    fn touching_boxes_do_not_collide() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(10.0, 0.0, 20.0, 10.0);
        assert!(!a.collide(b));
        assert!(a.collide(BBox::new(9.0, 9.0, 12.0, 12.0)));
    }

    #[test]
    fn inset_never_inverts_box() {
        let tiny = BBox::new(0.0, 0.0, 4.0, 20.0).inset(8.0);
        assert_eq!(tiny.width(), 0.0);
        assert_eq!(tiny.height(), 4.0);
    }
}
