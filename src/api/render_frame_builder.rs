use crate::core::{BBox, Orientation, Side};
use crate::interaction::ScrollbarElement;
use crate::layout::{
    AXIS_LABEL_OFFSET_PX, AXIS_TICK_LENGTH_PX, DEFAULT_LABEL_FONT_SIZE_PX, PlacedAxis,
    estimate_label_text_width_px,
};
use crate::render::{
    Color, LineCap, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ChartEngine;
use super::axis_labels::{tick_labels, value_ticks};
use super::scrollbar_style::ScrollbarElementHandle;

const AXIS_LINE_WIDTH_PX: f64 = 1.0;
const ROTATED_LABEL_DEG: f64 = 45.0;

/// Round-capped stroke that stays inside `bbox` along its long side.
fn capped_stroke(
    bbox: BBox,
    orientation: Orientation,
    handle: ScrollbarElementHandle,
) -> Option<LinePrimitive> {
    let width = handle.stroke_width;
    if bbox.is_degenerate() || width <= 0.0 {
        return None;
    }
    let half = width * 0.5;
    let line = match orientation {
        Orientation::Horizontal => {
            let y = bbox.center_y();
            let (x1, x2) = if bbox.width() > width {
                (bbox.min_x + half, bbox.max_x - half)
            } else {
                (bbox.center_x(), bbox.center_x())
            };
            LinePrimitive::new(x1, y, x2, y, width, handle.stroke)
        }
        Orientation::Vertical => {
            let x = bbox.center_x();
            let (y1, y2) = if bbox.height() > width {
                (bbox.min_y + half, bbox.max_y - half)
            } else {
                (bbox.center_y(), bbox.center_y())
            };
            LinePrimitive::new(x, y1, x, y2, width, handle.stroke)
        }
    };
    Some(line.with_cap(LineCap::Round))
}

/// Labels placed at evenly spaced category slots along one axis.
struct CategoryLabelPass<'a> {
    labels: &'a [&'a str],
    font_size_px: f64,
    rotated: bool,
    auto_hide: bool,
    color: Color,
}

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.core.model.viewport);
        self.append_axis_primitives(&mut frame);
        self.append_legend_primitives(&mut frame);
        self.append_scrollbar_primitives(&mut frame);
        frame
    }

    fn append_scrollbar_primitives(&self, frame: &mut RenderFrame) {
        let Some(scrollbar) = self.core.model.layout.scrollbar else {
            return;
        };
        if !scrollbar.track.is_interactive() {
            return;
        }
        let orientation = scrollbar.track.orientation;
        for element in [ScrollbarElement::Track, ScrollbarElement::Thumb] {
            if let Some(line) = self
                .scrollbar_element(element)
                .and_then(|handle| capped_stroke(handle.bbox, orientation, handle))
            {
                frame.lines.push(line);
            }
        }
    }

    fn append_axis_primitives(&self, frame: &mut RenderFrame) {
        let layout = &self.core.model.layout;
        let plot = layout.plot;
        let theme = &self.core.config.theme;

        if let Some(axis) = layout.category_axis {
            if axis.component.is_visible() {
                push_axis_line(frame, axis, plot, theme.axis_line_color);
                let labels = self.visible_categories();
                let pass = CategoryLabelPass {
                    labels: &labels,
                    font_size_px: self.core.config.category_axis.font_size_px,
                    rotated: axis.labels_rotated,
                    auto_hide: self.core.config.category_axis.auto_hide,
                    color: theme.text_color,
                };
                push_category_labels(frame, axis, plot, &pass, theme.axis_line_color);
            }
        }

        if let Some(axis) = layout.value_axis {
            if axis.component.is_visible() {
                push_axis_line(frame, axis, plot, theme.axis_line_color);
                let ticks = value_ticks(&self.core.model.filtered, &self.core.config.value_field);
                let labels = tick_labels(&ticks);
                push_value_labels(
                    frame,
                    axis,
                    plot,
                    &ticks,
                    &labels,
                    theme.text_color,
                    theme.axis_line_color,
                );
            }
        }
    }

    fn append_legend_primitives(&self, frame: &mut RenderFrame) {
        let (Some(placed), Some(legend)) =
            (self.core.model.layout.legend, self.legend_component())
        else {
            return;
        };
        if !placed.is_visible() {
            return;
        }
        let theme = &self.core.config.theme;
        for (index, item) in legend.item_placements(placed.bbox).into_iter().enumerate() {
            let marker_color = if theme.palette.is_empty() {
                theme.text_color
            } else {
                theme.palette[index % theme.palette.len()]
            };
            frame.rects.push(RectPrimitive::new(
                item.marker.min_x,
                item.marker.min_y,
                item.marker.width(),
                item.marker.height(),
                marker_color,
            ));
            if !item.label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    item.label,
                    item.text_x,
                    item.text_y,
                    legend.font_size_px,
                    theme.text_color,
                    TextHAlign::Left,
                ));
            }
        }
    }
}

/// Base line on the edge of the axis that touches the plot area.
fn push_axis_line(frame: &mut RenderFrame, axis: PlacedAxis, plot: BBox, color: Color) {
    let bbox = axis.component.bbox;
    let line = match axis.component.side {
        Side::Bottom => LinePrimitive::new(
            plot.min_x,
            bbox.min_y,
            plot.max_x,
            bbox.min_y,
            AXIS_LINE_WIDTH_PX,
            color,
        ),
        Side::Top => LinePrimitive::new(
            plot.min_x,
            bbox.max_y,
            plot.max_x,
            bbox.max_y,
            AXIS_LINE_WIDTH_PX,
            color,
        ),
        Side::Left => LinePrimitive::new(
            bbox.max_x,
            plot.min_y,
            bbox.max_x,
            plot.max_y,
            AXIS_LINE_WIDTH_PX,
            color,
        ),
        Side::Right => LinePrimitive::new(
            bbox.min_x,
            plot.min_y,
            bbox.min_x,
            plot.max_y,
            AXIS_LINE_WIDTH_PX,
            color,
        ),
    };
    frame.lines.push(line);
}

/// Tick from the axis base line outward, and the anchor its label hangs from.
fn tick_and_anchor(
    side: Side,
    bbox: BBox,
    position: f64,
    color: Color,
) -> (LinePrimitive, f64, f64) {
    let reach = AXIS_TICK_LENGTH_PX + AXIS_LABEL_OFFSET_PX;
    match side {
        Side::Bottom => (
            LinePrimitive::new(
                position,
                bbox.min_y,
                position,
                bbox.min_y + AXIS_TICK_LENGTH_PX,
                AXIS_LINE_WIDTH_PX,
                color,
            ),
            position,
            bbox.min_y + reach,
        ),
        Side::Top => (
            LinePrimitive::new(
                position,
                bbox.max_y,
                position,
                bbox.max_y - AXIS_TICK_LENGTH_PX,
                AXIS_LINE_WIDTH_PX,
                color,
            ),
            position,
            bbox.max_y - reach,
        ),
        Side::Left => (
            LinePrimitive::new(
                bbox.max_x,
                position,
                bbox.max_x - AXIS_TICK_LENGTH_PX,
                position,
                AXIS_LINE_WIDTH_PX,
                color,
            ),
            bbox.max_x - reach,
            position,
        ),
        Side::Right => (
            LinePrimitive::new(
                bbox.min_x,
                position,
                bbox.min_x + AXIS_TICK_LENGTH_PX,
                position,
                AXIS_LINE_WIDTH_PX,
                color,
            ),
            bbox.min_x + reach,
            position,
        ),
    }
}

fn label_align(side: Side) -> TextHAlign {
    match side {
        Side::Top | Side::Bottom => TextHAlign::Center,
        Side::Left => TextHAlign::Right,
        Side::Right => TextHAlign::Left,
    }
}

fn push_category_labels(
    frame: &mut RenderFrame,
    axis: PlacedAxis,
    plot: BBox,
    pass: &CategoryLabelPass<'_>,
    tick_color: Color,
) {
    if pass.labels.is_empty() {
        return;
    }
    let side = axis.component.side;
    let horizontal = side.is_horizontal();
    let span = if horizontal { plot.width() } else { plot.height() };
    let start = if horizontal { plot.min_x } else { plot.min_y };
    let slot = span / pass.labels.len() as f64;

    // Right edge of the last drawn label, for auto-hide on horizontal axes.
    let mut last_drawn_end = f64::NEG_INFINITY;
    for (index, label) in pass.labels.iter().enumerate() {
        let position = start + slot * (index as f64 + 0.5);
        let (tick, x, y) = tick_and_anchor(side, axis.component.bbox, position, tick_color);
        frame.lines.push(tick);
        if label.is_empty() {
            continue;
        }

        if pass.auto_hide && horizontal && !pass.rotated {
            let half_width = estimate_label_text_width_px(label, pass.font_size_px) * 0.5;
            if x - half_width < last_drawn_end {
                continue;
            }
            last_drawn_end = x + half_width;
        }

        let mut text = TextPrimitive::new(
            *label,
            x,
            y,
            pass.font_size_px,
            pass.color,
            label_align(side),
        );
        if pass.rotated && horizontal {
            text = TextPrimitive {
                h_align: TextHAlign::Right,
                ..text
            }
            .with_rotation_deg(-ROTATED_LABEL_DEG);
        }
        frame.texts.push(text);
    }
}

fn push_value_labels(
    frame: &mut RenderFrame,
    axis: PlacedAxis,
    plot: BBox,
    ticks: &[f64],
    labels: &[String],
    text_color: Color,
    tick_color: Color,
) {
    let (Some(low), Some(high)) = (ticks.first().copied(), ticks.last().copied()) else {
        return;
    };
    let span = high - low;
    if span <= 0.0 {
        return;
    }
    let side = axis.component.side;
    for (tick, label) in ticks.iter().zip(labels) {
        let fraction = (tick - low) / span;
        let position = if side.is_horizontal() {
            plot.min_x + fraction * plot.width()
        } else {
            plot.max_y - fraction * plot.height()
        };
        let (tick_line, x, y) = tick_and_anchor(side, axis.component.bbox, position, tick_color);
        frame.lines.push(tick_line);
        frame.texts.push(TextPrimitive::new(
            label.as_str(),
            x,
            y,
            DEFAULT_LABEL_FONT_SIZE_PX,
            text_color,
            label_align(side),
        ));
    }
}
