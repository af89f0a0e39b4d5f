use tracing::{debug, trace};

use crate::interaction::{
    InteractionEffect, InteractionEffects, InteractionMode, PointerContext, PointerInput,
    ScrollbarElement,
};
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.core.model.interaction.mode()
    }

    #[must_use]
    pub fn is_hovered(&self, element: ScrollbarElement) -> bool {
        self.core.model.interaction.is_hovered(element)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.handle_pointer(PointerInput::Down { x, y });
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.handle_pointer(PointerInput::Move { x, y });
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.handle_pointer(PointerInput::Up { x, y });
    }

    /// Pointer left the host window; ends any drag and clears hover.
    pub fn pointer_leave(&mut self) {
        self.handle_pointer(PointerInput::Leave);
    }

    /// Feeds one pointer transition through the scrollbar state machine and
    /// applies the effects it requests, in order.
    pub fn handle_pointer(&mut self, input: PointerInput) {
        let Some(context) = self.pointer_context() else {
            return;
        };
        let effects = self.core.model.interaction.on_pointer(input, context);
        self.apply_interaction_effects(effects);
    }

    pub(super) fn pointer_context(&self) -> Option<PointerContext> {
        self.core.model.layout.track().map(|track| PointerContext {
            track,
            state: self.core.model.scroll.state(),
        })
    }

    pub(super) fn apply_interaction_effects(&mut self, effects: InteractionEffects) {
        for effect in effects {
            match effect {
                InteractionEffect::RequestValue(value) => {
                    trace!(value, "pointer requested scroll value");
                    let _ = self.set_value(value);
                }
                InteractionEffect::DragStarted => {
                    debug!("scrollbar drag started");
                    self.emit_plugin_event(PluginEvent::DragStarted);
                }
                InteractionEffect::DragEnded => {
                    debug!("scrollbar drag ended");
                    self.emit_plugin_event(PluginEvent::DragEnded);
                }
                InteractionEffect::HoverChanged { element, hovered } => {
                    self.mark_needs_render();
                    self.emit_plugin_event(PluginEvent::HoverChanged { element, hovered });
                }
            }
        }
    }
}
