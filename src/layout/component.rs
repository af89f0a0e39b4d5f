use std::f64::consts::FRAC_1_SQRT_2;

use serde::{Deserialize, Serialize};

use crate::core::{
    BBox, DEFAULT_TRACK_THICKNESS_PX, Orientation, ReservedMargins, Side, TrackGeometry,
    compute_track_geometry,
};

use super::text_metrics::{estimate_label_text_width_px, max_label_width_px};

/// Gap carved between a docked component and whatever comes next.
pub const COMPONENT_GAP_PX: f64 = 8.0;
pub const AXIS_TICK_LENGTH_PX: f64 = 4.0;
pub const AXIS_LABEL_OFFSET_PX: f64 = 4.0;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 12.0;
pub const LEGEND_MARKER_SIZE_PX: f64 = 8.0;
pub const LEGEND_MARKER_GAP_PX: f64 = 4.0;
pub const LEGEND_ITEM_SPACING_PX: f64 = 16.0;
pub const LEGEND_ROW_HEIGHT_PX: f64 = 16.0;

/// Role a component plays in the chart; also its placement priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentRole {
    Legend,
    Scrollbar,
    CategoryAxis,
    ValueAxis,
}

/// Inputs to a component's size query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstraints {
    /// Box left after every higher-priority component was carved out.
    pub available: BBox,
    /// Plot area from the previous negotiation pass, if any.
    pub plot_hint: Option<BBox>,
}

/// Capability shared by every component the negotiator places.
pub trait LayoutComponent {
    fn role(&self) -> ComponentRole;

    fn side(&self) -> Side;

    fn gap(&self) -> f64 {
        COMPONENT_GAP_PX
    }

    /// Extent the component needs perpendicular to its side. Must never
    /// underestimate, otherwise neighbours may overlap it.
    fn query_size(&self, constraints: &LayoutConstraints) -> f64;

    /// Resolves the drawn box from the strip carved for the component and the
    /// final plot area.
    fn place(&self, strip: BBox, plot: BBox) -> BBox;

    /// Whether the size depends on where the plot area finally lands.
    fn depends_on_plot(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendComponent {
    pub position: Side,
    pub labels: Vec<String>,
    pub font_size_px: f64,
}

/// Marker and label anchor of one legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItemPlacement {
    pub label: String,
    pub marker: BBox,
    pub text_x: f64,
    pub text_y: f64,
}

impl LegendComponent {
    #[must_use]
    pub fn new(position: Side, labels: Vec<String>) -> Self {
        Self {
            position,
            labels,
            font_size_px: DEFAULT_LABEL_FONT_SIZE_PX,
        }
    }

    fn item_width(&self, label: &str) -> f64 {
        LEGEND_MARKER_SIZE_PX
            + LEGEND_MARKER_GAP_PX
            + estimate_label_text_width_px(label, self.font_size_px)
    }

    /// Flows items into rows no wider than `max_width`; each row keeps at
    /// least one item.
    fn rows(&self, max_width: f64) -> Vec<Vec<usize>> {
        let mut rows: Vec<Vec<usize>> = Vec::new();
        let mut row_width = 0.0;
        for (index, label) in self.labels.iter().enumerate() {
            let width = self.item_width(label);
            match rows.last_mut() {
                Some(row) if row_width + LEGEND_ITEM_SPACING_PX + width <= max_width => {
                    row.push(index);
                    row_width += LEGEND_ITEM_SPACING_PX + width;
                }
                _ => {
                    rows.push(vec![index]);
                    row_width = width;
                }
            }
        }
        rows
    }

    fn row_width(&self, row: &[usize]) -> f64 {
        let items: f64 = row
            .iter()
            .map(|index| self.item_width(&self.labels[*index]))
            .sum();
        items + LEGEND_ITEM_SPACING_PX * row.len().saturating_sub(1) as f64
    }

    fn column_width(&self) -> f64 {
        self.labels
            .iter()
            .map(|label| self.item_width(label))
            .fold(0.0, f64::max)
    }

    /// Positions every entry inside the placed legend box.
    #[must_use]
    pub fn item_placements(&self, bbox: BBox) -> Vec<LegendItemPlacement> {
        let rows: Vec<Vec<usize>> = if self.position.is_horizontal() {
            self.rows(bbox.width())
        } else {
            (0..self.labels.len()).map(|index| vec![index]).collect()
        };

        let mut placements = Vec::with_capacity(self.labels.len());
        for (row_index, row) in rows.iter().enumerate() {
            let top = bbox.min_y + LEGEND_ROW_HEIGHT_PX * row_index as f64;
            if top + LEGEND_ROW_HEIGHT_PX > bbox.max_y + 1e-9 {
                break;
            }
            let mut x = if self.position.is_horizontal() {
                bbox.center_x() - self.row_width(row) * 0.5
            } else {
                bbox.min_x
            };
            for index in row {
                let label = &self.labels[*index];
                let marker_y = top + (LEGEND_ROW_HEIGHT_PX - LEGEND_MARKER_SIZE_PX) * 0.5;
                placements.push(LegendItemPlacement {
                    label: label.clone(),
                    marker: BBox::from_rect(
                        x,
                        marker_y,
                        LEGEND_MARKER_SIZE_PX,
                        LEGEND_MARKER_SIZE_PX,
                    ),
                    text_x: x + LEGEND_MARKER_SIZE_PX + LEGEND_MARKER_GAP_PX,
                    text_y: top + (LEGEND_ROW_HEIGHT_PX - self.font_size_px) * 0.5,
                });
                x += self.item_width(label) + LEGEND_ITEM_SPACING_PX;
            }
        }
        placements
    }
}

impl LayoutComponent for LegendComponent {
    fn role(&self) -> ComponentRole {
        ComponentRole::Legend
    }

    fn side(&self) -> Side {
        self.position
    }

    fn query_size(&self, constraints: &LayoutConstraints) -> f64 {
        if self.labels.is_empty() {
            return 0.0;
        }
        if self.position.is_horizontal() {
            self.rows(constraints.available.width()).len() as f64 * LEGEND_ROW_HEIGHT_PX
        } else {
            self.column_width()
        }
    }

    fn place(&self, strip: BBox, _plot: BBox) -> BBox {
        if self.position.is_horizontal() {
            let content = self
                .rows(strip.width())
                .iter()
                .map(|row| self.row_width(row))
                .fold(0.0, f64::max)
                .min(strip.width());
            let min_x = strip.center_x() - content * 0.5;
            BBox::new(min_x, strip.min_y, min_x + content, strip.max_y)
        } else {
            let content =
                (self.labels.len() as f64 * LEGEND_ROW_HEIGHT_PX).min(strip.height());
            let min_y = strip.center_y() - content * 0.5;
            BBox::new(strip.min_x, min_y, strip.max_x, min_y + content)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarComponent {
    pub orientation: Orientation,
    pub thickness: f64,
}

impl ScrollbarComponent {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            thickness: DEFAULT_TRACK_THICKNESS_PX,
        }
    }

    /// Track aligned with the plot area along the scroll direction.
    #[must_use]
    pub fn track(&self, strip: BBox, plot: BBox) -> TrackGeometry {
        let reserved = match self.orientation {
            Orientation::Horizontal => ReservedMargins::along(
                plot.min_x - strip.min_x,
                strip.max_x - plot.max_x,
            ),
            Orientation::Vertical => ReservedMargins::along(
                plot.min_y - strip.min_y,
                strip.max_y - plot.max_y,
            ),
        };
        let thickness = match self.orientation {
            Orientation::Horizontal => self.thickness.min(strip.height()),
            Orientation::Vertical => self.thickness.min(strip.width()),
        };
        compute_track_geometry(strip, self.orientation, reserved, thickness)
    }
}

impl LayoutComponent for ScrollbarComponent {
    fn role(&self) -> ComponentRole {
        ComponentRole::Scrollbar
    }

    fn side(&self) -> Side {
        match self.orientation {
            Orientation::Horizontal => Side::Bottom,
            Orientation::Vertical => Side::Right,
        }
    }

    fn query_size(&self, constraints: &LayoutConstraints) -> f64 {
        compute_track_geometry(
            constraints.available,
            self.orientation,
            ReservedMargins::default(),
            self.thickness,
        )
        .thickness
    }

    fn place(&self, strip: BBox, plot: BBox) -> BBox {
        self.track(strip, plot).bbox()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisComponent {
    pub role: ComponentRole,
    pub side: Side,
    pub labels: Vec<String>,
    pub font_size_px: f64,
    pub auto_rotate: bool,
}

impl AxisComponent {
    #[must_use]
    pub fn new(role: ComponentRole, side: Side, labels: Vec<String>) -> Self {
        Self {
            role,
            side,
            labels,
            font_size_px: DEFAULT_LABEL_FONT_SIZE_PX,
            auto_rotate: false,
        }
    }

    #[must_use]
    pub fn with_auto_rotate(mut self, auto_rotate: bool) -> Self {
        self.auto_rotate = auto_rotate;
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    /// Whether labels along a span of `span_px` must be rotated to fit.
    #[must_use]
    pub fn labels_rotated(&self, span_px: f64) -> bool {
        if !self.side.is_horizontal() || !self.auto_rotate || self.labels.is_empty() {
            return false;
        }
        let slot = span_px / self.labels.len() as f64;
        max_label_width_px(&self.labels, self.font_size_px) > slot
    }

    fn label_extent(&self, span_px: f64) -> f64 {
        let widest = max_label_width_px(&self.labels, self.font_size_px);
        if !self.side.is_horizontal() {
            return widest;
        }
        if self.labels_rotated(span_px) {
            (widest + self.font_size_px) * FRAC_1_SQRT_2
        } else {
            self.font_size_px
        }
    }
}

impl LayoutComponent for AxisComponent {
    fn role(&self) -> ComponentRole {
        self.role
    }

    fn side(&self) -> Side {
        self.side
    }

    fn gap(&self) -> f64 {
        0.0
    }

    fn query_size(&self, constraints: &LayoutConstraints) -> f64 {
        let span = constraints
            .plot_hint
            .unwrap_or(constraints.available)
            .width()
            .min(constraints.available.width());
        AXIS_TICK_LENGTH_PX + AXIS_LABEL_OFFSET_PX + self.label_extent(span)
    }

    fn place(&self, strip: BBox, plot: BBox) -> BBox {
        if self.side.is_horizontal() {
            BBox::new(plot.min_x, strip.min_y, plot.max_x, strip.max_y)
        } else {
            BBox::new(strip.min_x, plot.min_y, strip.max_x, plot.max_y)
        }
    }

    fn depends_on_plot(&self) -> bool {
        self.side.is_horizontal() && self.auto_rotate
    }
}

/// Closed set of components the negotiator knows how to place.
#[derive(Debug, Clone, Copy)]
pub enum ComponentSlot<'a> {
    Legend(&'a LegendComponent),
    Scrollbar(&'a ScrollbarComponent),
    Axis(&'a AxisComponent),
}

impl ComponentSlot<'_> {
    fn component(&self) -> &dyn LayoutComponent {
        match self {
            Self::Legend(legend) => *legend,
            Self::Scrollbar(scrollbar) => *scrollbar,
            Self::Axis(axis) => *axis,
        }
    }
}

impl LayoutComponent for ComponentSlot<'_> {
    fn role(&self) -> ComponentRole {
        self.component().role()
    }

    fn side(&self) -> Side {
        self.component().side()
    }

    fn gap(&self) -> f64 {
        self.component().gap()
    }

    fn query_size(&self, constraints: &LayoutConstraints) -> f64 {
        self.component().query_size(constraints)
    }

    fn place(&self, strip: BBox, plot: BBox) -> BBox {
        self.component().place(strip, plot)
    }

    fn depends_on_plot(&self) -> bool {
        self.component().depends_on_plot()
    }
}
