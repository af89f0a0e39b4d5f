use tracing::debug;

use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Tears the chart down.
    ///
    /// Plugins receive `Destroyed` and are then detached, an in-flight drag is
    /// dropped without reverting what it committed, the scroll state returns
    /// to its initial value and pointer input is ignored until `set_data` or
    /// `resize` recreates the chart.
    pub fn destroy(&mut self) {
        if self.core.runtime.destroyed {
            return;
        }
        self.emit_plugin_event(PluginEvent::Destroyed);
        let drag_cancelled = self.core.model.interaction.detach();
        self.core.runtime.plugins.clear();
        self.core.model.scroll.reset();
        self.recompute_window();
        self.core.runtime.destroyed = true;
        self.mark_needs_render();
        debug!(drag_cancelled, "chart destroyed");
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.core.runtime.destroyed
    }

    pub(super) fn reattach(&mut self) {
        if !self.core.runtime.destroyed {
            return;
        }
        self.core.runtime.destroyed = false;
        self.core.model.interaction.attach();
        debug!("chart recreated");
    }
}
