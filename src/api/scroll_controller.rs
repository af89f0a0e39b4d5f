use tracing::{debug, warn};

use crate::core::{ScrollState, ValueChange};
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Current scroll ratio, always in `[0, 1]`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.core.model.scroll.value()
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.core.model.scroll.state()
    }

    /// Clamps and commits a scroll ratio.
    ///
    /// A committed change re-filters the data window and refreshes layout
    /// before observers are notified, so anything reading the engine from a
    /// plugin hook or right after this returns sees the updated window.
    /// Re-committing the current value is a no-op and notifies nobody.
    pub fn set_value(&mut self, value: f64) -> ValueChange {
        let change = self.core.model.scroll.set_value(value);
        match change {
            ValueChange::Unchanged => {
                if value.is_nan() {
                    warn!("ignoring NaN scroll value");
                }
            }
            ValueChange::Changed { previous, current } => {
                debug!(previous, current, "scroll value committed");
                self.mark_needs_render();
                let outcome = self.refresh_layout();
                self.emit_plugin_event(PluginEvent::ValueChanged { previous, current });
                self.emit_refresh_events(outcome);
            }
        }
        change
    }
}
