use crate::core::Viewport;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    #[must_use]
    pub fn thumb_ratio(&self) -> f64 {
        self.core.model.scroll.thumb_ratio()
    }

    /// Track length in pixels, `0.0` without a placed scrollbar.
    #[must_use]
    pub fn track_length(&self) -> f64 {
        self.core
            .model
            .layout
            .track()
            .map_or(0.0, |track| track.length)
    }
}
