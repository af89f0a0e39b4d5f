use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{BBox, Side, TrackGeometry};

use super::component::{
    AxisComponent, ComponentRole, ComponentSlot, LayoutComponent, LayoutConstraints,
    LegendComponent, ScrollbarComponent,
};

pub const DEFAULT_OUTER_PADDING_PX: f64 = 8.0;

/// Upper bound on carve passes for one negotiation.
pub const MAX_NEGOTIATION_PASSES: usize = 2;

/// Everything the negotiator needs for one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutRequest {
    pub canvas: BBox,
    pub padding: f64,
    pub legend: Option<LegendComponent>,
    pub scrollbar: Option<ScrollbarComponent>,
    pub category_axis: Option<AxisComponent>,
    pub value_axis: Option<AxisComponent>,
}

impl LayoutRequest {
    #[must_use]
    pub fn new(canvas: BBox) -> Self {
        Self {
            canvas,
            padding: DEFAULT_OUTER_PADDING_PX,
            ..Self::default()
        }
    }

    /// Present components in placement priority order.
    #[must_use]
    pub fn slots(&self) -> SmallVec<[ComponentSlot<'_>; 4]> {
        let mut slots = SmallVec::new();
        if let Some(legend) = &self.legend {
            slots.push(ComponentSlot::Legend(legend));
        }
        if let Some(scrollbar) = &self.scrollbar {
            slots.push(ComponentSlot::Scrollbar(scrollbar));
        }
        if let Some(axis) = &self.category_axis {
            slots.push(ComponentSlot::Axis(axis));
        }
        if let Some(axis) = &self.value_axis {
            slots.push(ComponentSlot::Axis(axis));
        }
        slots
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub role: ComponentRole,
    pub side: Side,
    /// Drawn footprint.
    pub bbox: BBox,
    /// Footprint plus the gap reserved between it and the plot area.
    pub layout_bbox: BBox,
}

impl PlacedComponent {
    /// Zero-extent components are hidden and ignore pointer input.
    #[must_use]
    pub fn is_visible(self) -> bool {
        !self.bbox.is_degenerate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedScrollbar {
    pub component: PlacedComponent,
    pub track: TrackGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedAxis {
    pub component: PlacedComponent,
    pub labels_rotated: bool,
}

/// Boxes published by one negotiation. Replaced wholesale on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub canvas: BBox,
    pub plot: BBox,
    pub legend: Option<PlacedComponent>,
    pub scrollbar: Option<PlacedScrollbar>,
    pub category_axis: Option<PlacedAxis>,
    pub value_axis: Option<PlacedAxis>,
    pub passes: usize,
    pub converged: bool,
}

impl LayoutSnapshot {
    /// Every placed component, in placement priority order.
    #[must_use]
    pub fn components(&self) -> SmallVec<[PlacedComponent; 4]> {
        let mut placed = SmallVec::new();
        placed.extend(self.legend);
        placed.extend(self.scrollbar.map(|scrollbar| scrollbar.component));
        placed.extend(self.category_axis.map(|axis| axis.component));
        placed.extend(self.value_axis.map(|axis| axis.component));
        placed
    }

    #[must_use]
    pub fn track(&self) -> Option<TrackGeometry> {
        self.scrollbar.map(|scrollbar| scrollbar.track)
    }
}

struct CarvePass<'a> {
    strips: SmallVec<[(ComponentSlot<'a>, BBox); 4]>,
    plot: BBox,
}

fn carve_pass<'a>(
    slots: &[ComponentSlot<'a>],
    inner: BBox,
    plot_hint: Option<BBox>,
) -> CarvePass<'a> {
    let mut remaining = inner;
    let mut strips = SmallVec::new();
    for slot in slots {
        let extent = slot.query_size(&LayoutConstraints {
            available: remaining,
            plot_hint,
        });
        let gap = if extent > 0.0 { slot.gap() } else { 0.0 };
        let (strip, rest) = remaining.carve(slot.side(), extent, gap);
        strips.push((*slot, strip));
        remaining = rest;
    }
    CarvePass {
        strips,
        plot: remaining,
    }
}

/// Resolves plot-area and component boxes for `request`.
///
/// Strips are carved off the padded canvas in priority order, so each step
/// only shrinks what is left and published boxes never overlap. A second
/// pass runs only when some component sized itself against a plot area it
/// had not seen yet; the last computed boxes win when passes run out.
#[must_use]
pub fn negotiate_layout(request: &LayoutRequest) -> LayoutSnapshot {
    let inner = request.canvas.inset(request.padding);
    let slots = request.slots();
    let plot_dependent = slots.iter().any(LayoutComponent::depends_on_plot);

    let mut passes = 0;
    let mut previous_plot = None;
    let mut plot_hint = None;
    let (pass, converged) = loop {
        passes += 1;
        let pass = carve_pass(&slots, inner, plot_hint);
        if !plot_dependent || previous_plot == Some(pass.plot) {
            break (pass, true);
        }
        if passes >= MAX_NEGOTIATION_PASSES {
            warn!(
                passes,
                plot_width = pass.plot.width(),
                plot_height = pass.plot.height(),
                "layout negotiation did not converge; keeping last pass"
            );
            break (pass, false);
        }
        previous_plot = Some(pass.plot);
        plot_hint = Some(pass.plot);
    };

    let plot = pass.plot;
    let mut snapshot = LayoutSnapshot {
        canvas: request.canvas,
        plot,
        legend: None,
        scrollbar: None,
        category_axis: None,
        value_axis: None,
        passes,
        converged,
    };

    for (slot, strip) in pass.strips {
        let bbox = slot.place(strip, plot);
        let placed = PlacedComponent {
            role: slot.role(),
            side: slot.side(),
            bbox,
            layout_bbox: bbox.expand_toward(slot.side().opposite(), slot.gap()),
        };
        match slot {
            ComponentSlot::Legend(_) => snapshot.legend = Some(placed),
            ComponentSlot::Scrollbar(scrollbar) => {
                snapshot.scrollbar = Some(PlacedScrollbar {
                    component: placed,
                    track: scrollbar.track(strip, plot),
                });
            }
            ComponentSlot::Axis(axis) => {
                let placed_axis = PlacedAxis {
                    component: placed,
                    labels_rotated: axis.labels_rotated(plot.width()),
                };
                if axis.role == ComponentRole::ValueAxis {
                    snapshot.value_axis = Some(placed_axis);
                } else {
                    snapshot.category_axis = Some(placed_axis);
                }
            }
        }
    }

    debug!(
        passes,
        converged,
        plot_min_x = plot.min_x,
        plot_min_y = plot.min_y,
        plot_max_x = plot.max_x,
        plot_max_y = plot.max_y,
        "layout negotiated"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::{LayoutRequest, negotiate_layout};
    use crate::core::{BBox, Orientation, Side};
    use crate::layout::{AxisComponent, ComponentRole, LegendComponent, ScrollbarComponent};

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    fn request(width: f64, height: f64) -> LayoutRequest {
        let mut request = LayoutRequest::new(BBox::new(0.0, 0.0, width, height));
        request.scrollbar = Some(ScrollbarComponent::new(Orientation::Horizontal));
        request.category_axis = Some(AxisComponent::new(
            ComponentRole::CategoryAxis,
            Side::Bottom,
            labels(&["A", "B", "C"]),
        ));
        request.value_axis = Some(AxisComponent::new(
            ComponentRole::ValueAxis,
            Side::Left,
            labels(&["0", "50", "100"]),
        ));
        request
    }

    #[test]
    fn horizontal_scrollbar_docks_under_axis() {
        let snapshot = negotiate_layout(&request(500.0, 400.0));
        let scrollbar = snapshot.scrollbar.expect("scrollbar placed");
        let axis = snapshot.category_axis.expect("axis placed");

        assert_eq!(scrollbar.component.bbox.height(), 8.0);
        assert_eq!(scrollbar.component.bbox.max_y, 392.0);
        assert_eq!(scrollbar.component.layout_bbox.height(), 16.0);
        assert!((scrollbar.track.length - snapshot.plot.width()).abs() <= 1e-9);
        assert_eq!(axis.component.bbox.max_y, 376.0);
        assert!((snapshot.plot.min_x - 38.32).abs() <= 1e-9);
        assert!(snapshot.converged);
        assert_eq!(snapshot.passes, 1);
    }

    #[test]
    fn vertical_scrollbar_spans_plot_height() {
        let mut request = request(500.0, 400.0);
        request.scrollbar = Some(ScrollbarComponent::new(Orientation::Vertical));
        let snapshot = negotiate_layout(&request);
        let scrollbar = snapshot.scrollbar.expect("scrollbar placed");

        assert_eq!(scrollbar.component.bbox.width(), 8.0);
        assert_eq!(scrollbar.component.bbox.max_x, 492.0);
        assert!((scrollbar.track.length - snapshot.plot.height()).abs() <= 1e-9);
        assert!((scrollbar.track.y - snapshot.plot.min_y).abs() <= 1e-9);
    }

    #[test]
    fn placed_components_never_collide() {
        for position in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let mut request = request(320.0, 240.0);
                request.legend = Some(LegendComponent::new(
                    position,
                    labels(&["North", "South", "East", "West"]),
                ));
                request.scrollbar = Some(ScrollbarComponent::new(orientation));
                let snapshot = negotiate_layout(&request);
                let placed = snapshot.components();
                for (index, lhs) in placed.iter().enumerate() {
                    assert!(!lhs.bbox.collide(snapshot.plot));
                    for rhs in placed.iter().skip(index + 1) {
                        assert!(
                            !lhs.bbox.collide(rhs.bbox),
                            "{:?} overlaps {:?} for {position:?}/{orientation:?}",
                            lhs.role,
                            rhs.role
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn oversized_components_degenerate_instead_of_failing() {
        let mut request = request(40.0, 30.0);
        request.legend = Some(LegendComponent::new(
            Side::Bottom,
            labels(&["a very long legend entry", "another long legend entry"]),
        ));
        let snapshot = negotiate_layout(&request);
        assert!(snapshot.plot.width() >= 0.0);
        assert!(snapshot.plot.height() >= 0.0);
        let scrollbar = snapshot.scrollbar.expect("scrollbar placed");
        let legend = snapshot.legend.expect("legend placed");
        assert!(!scrollbar.component.is_visible());
        assert!(!scrollbar.component.bbox.collide(legend.bbox));
    }

    #[test]
    fn rotating_axis_refines_against_final_plot() {
        let mut request = request(200.0, 300.0);
        request.category_axis = Some(
            AxisComponent::new(
                ComponentRole::CategoryAxis,
                Side::Bottom,
                labels(&["Furnishings", "Bookcases", "Appliances", "Chairs"]),
            )
            .with_auto_rotate(true),
        );
        let snapshot = negotiate_layout(&request);
        let axis = snapshot.category_axis.expect("axis placed");
        assert!(axis.labels_rotated);
        assert!(snapshot.passes <= super::MAX_NEGOTIATION_PASSES);
        assert!(axis.component.bbox.height() > 20.0);
    }
}
