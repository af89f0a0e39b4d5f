use serde::{Deserialize, Serialize};

use crate::core::BBox;
use crate::interaction::ScrollbarElement;
use crate::render::{Color, Renderer};

use super::{ChartEngine, ScrollbarStyleConfig, ScrollbarTheme};

/// Colors the scrollbar is drawn with after overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarStyle {
    pub track_color: Color,
    pub thumb_color: Color,
    pub thumb_highlight_color: Color,
}

/// Per-chart overrides win over the theme, field by field.
#[must_use]
pub fn resolve_scrollbar_style(
    overrides: ScrollbarStyleConfig,
    theme: ScrollbarTheme,
) -> ScrollbarStyle {
    ScrollbarStyle {
        track_color: overrides.track_color.unwrap_or(theme.default.track_color),
        thumb_color: overrides.thumb_color.unwrap_or(theme.default.thumb_color),
        thumb_highlight_color: overrides
            .thumb_highlight_color
            .unwrap_or(theme.hover.thumb_color),
    }
}

/// Current drawing attributes of one named scrollbar element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarElementHandle {
    pub element: ScrollbarElement,
    pub bbox: BBox,
    pub stroke: Color,
    pub stroke_width: f64,
    pub hovered: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Resolved scrollbar colors, or `None` without a scrollbar.
    #[must_use]
    pub fn scrollbar_style(&self) -> Option<ScrollbarStyle> {
        self.core.config.scrollbar.map(|scrollbar| {
            resolve_scrollbar_style(scrollbar.style, self.core.config.theme.scrollbar)
        })
    }

    /// Looks up `track` or `thumb` with the attributes it is drawn with now.
    #[must_use]
    pub fn element_by_local_id(&self, local_id: &str) -> Option<ScrollbarElementHandle> {
        ScrollbarElement::from_local_id(local_id).and_then(|element| self.scrollbar_element(element))
    }

    #[must_use]
    pub fn scrollbar_element(&self, element: ScrollbarElement) -> Option<ScrollbarElementHandle> {
        let style = self.scrollbar_style()?;
        let track = self.core.model.layout.track()?;
        let hovered = self.core.model.interaction.is_hovered(element);
        let (bbox, stroke) = match element {
            ScrollbarElement::Track => (track.bbox(), style.track_color),
            ScrollbarElement::Thumb => {
                let thumb = track.thumb(self.core.model.scroll.state());
                let stroke = if hovered {
                    style.thumb_highlight_color
                } else {
                    style.thumb_color
                };
                (track.thumb_bbox(thumb), stroke)
            }
        };
        Some(ScrollbarElementHandle {
            element,
            bbox,
            stroke,
            stroke_width: track.thickness,
            hovered,
        })
    }
}
