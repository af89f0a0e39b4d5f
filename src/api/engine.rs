use crate::error::ChartResult;
use crate::render::Renderer;

use super::{PluginEvent, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates the scroll controller, data window, layout
/// negotiation, pointer interaction and renderer calls.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    /// Draws the current state and clears the pending-render flag.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.core.runtime.needs_render = false;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Returns `true` when state changed since the last successful render.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.core.runtime.needs_render
    }

    pub(super) fn mark_needs_render(&mut self) {
        self.core.runtime.needs_render = true;
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
