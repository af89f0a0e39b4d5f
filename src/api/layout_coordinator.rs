use tracing::{debug, warn};

use crate::core::{BBox, Side, TrackGeometry, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::layout::{
    AxisComponent, ComponentRole, LayoutRequest, LayoutSnapshot, LegendComponent,
    ScrollbarComponent, negotiate_layout,
};
use crate::interaction::InteractionEffects;
use crate::render::Renderer;

use super::axis_labels::{tick_labels, value_ticks};
use super::data_window::resolve_thumb_ratio;
use super::{ChartEngine, PluginEvent};

/// Upper bound on negotiate/re-filter rounds per refresh.
pub const MAX_REFILTER_PASSES: usize = 2;

/// What a refresh changed, so callers can notify observers afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct RefreshOutcome {
    pub(super) window_changed: bool,
    pub(super) layout_changed: bool,
    /// Hover flips caused by the thumb moving under a stationary pointer.
    pub(super) hover: InteractionEffects,
}

impl<R: Renderer> ChartEngine<R> {
    /// Side the category axis docks on.
    pub(super) fn category_axis_side(&self) -> Side {
        if self.core.config.transposed {
            Side::Left
        } else {
            Side::Bottom
        }
    }

    pub(super) fn value_axis_side(&self) -> Side {
        if self.core.config.transposed {
            Side::Bottom
        } else {
            Side::Left
        }
    }

    pub(super) fn legend_component(&self) -> Option<LegendComponent> {
        let legend = self.core.config.legend;
        if !legend.visible || self.core.model.series.is_empty() {
            return None;
        }
        Some(LegendComponent::new(
            legend.position,
            self.core.model.series.iter().cloned().collect(),
        ))
    }

    /// Negotiation inputs derived from the current config, data and window.
    pub(super) fn build_layout_request(&self) -> LayoutRequest {
        let config = &self.core.config;
        let model = &self.core.model;
        let canvas = BBox::new(
            0.0,
            0.0,
            f64::from(model.viewport.width),
            f64::from(model.viewport.height),
        );

        let mut request = LayoutRequest::new(canvas);
        request.padding = config.padding;
        request.legend = self.legend_component();
        request.scrollbar = config
            .scrollbar
            .map(|scrollbar| ScrollbarComponent::new(scrollbar.orientation));
        request.category_axis = Some(
            AxisComponent::new(
                ComponentRole::CategoryAxis,
                self.category_axis_side(),
                self.visible_categories()
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            )
            .with_auto_rotate(config.category_axis.auto_rotate)
            .with_font_size_px(config.category_axis.font_size_px),
        );
        request.value_axis = Some(AxisComponent::new(
            ComponentRole::ValueAxis,
            self.value_axis_side(),
            tick_labels(&value_ticks(&model.filtered, &config.value_field)),
        ));
        request
    }

    /// Runs negotiation, thumb sizing and window filtering until the
    /// negotiation inputs stop changing or the pass budget is spent.
    pub(super) fn refresh_layout(&mut self) -> RefreshOutcome {
        let previous_window = self.core.model.window;
        let previous_layout = self.core.model.layout.clone();
        let category_size = self
            .core
            .config
            .scrollbar
            .map_or(0.0, |scrollbar| scrollbar.category_size);

        let mut request = self.build_layout_request();
        let mut passes = 0;
        loop {
            passes += 1;
            let layout = negotiate_layout(&request);
            let thumb_ratio = resolve_thumb_ratio(
                layout.track(),
                category_size,
                self.core.model.categories.len(),
            );
            self.core.model.scroll.set_thumb_ratio(thumb_ratio);
            self.core.model.layout = layout;
            self.recompute_window();

            let next = self.build_layout_request();
            if next == request {
                break;
            }
            if passes >= MAX_REFILTER_PASSES {
                warn!(
                    passes,
                    "data window did not settle within pass budget; keeping last layout"
                );
                break;
            }
            request = next;
        }

        let context = self.pointer_context();
        let outcome = RefreshOutcome {
            window_changed: self.core.model.window != previous_window,
            layout_changed: self.core.model.layout != previous_layout,
            hover: self.core.model.interaction.refresh_hover(context),
        };
        if outcome.window_changed || outcome.layout_changed || !outcome.hover.is_empty() {
            self.mark_needs_render();
        }
        debug!(
            passes,
            window_changed = outcome.window_changed,
            layout_changed = outcome.layout_changed,
            thumb_ratio = self.core.model.scroll.thumb_ratio(),
            "layout refreshed"
        );
        outcome
    }

    pub(super) fn emit_refresh_events(&mut self, outcome: RefreshOutcome) {
        if outcome.window_changed {
            if let Some(window) = self.core.model.window {
                self.emit_plugin_event(PluginEvent::WindowChanged {
                    start: window.start_index,
                    end: window.end_index,
                });
            }
        }
        if outcome.layout_changed {
            self.emit_plugin_event(PluginEvent::LayoutChanged);
        }
        self.apply_interaction_effects(outcome.hover);
    }

    /// Updates the canvas size and re-runs layout and filtering.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        self.reattach();
        self.core.model.viewport = viewport;
        self.mark_needs_render();
        let outcome = self.refresh_layout();
        debug!(width, height, "chart resized");
        self.emit_plugin_event(PluginEvent::Resized { width, height });
        self.emit_refresh_events(outcome);
        Ok(())
    }

    /// Boxes published by the most recent layout pass.
    #[must_use]
    pub fn layout(&self) -> &LayoutSnapshot {
        &self.core.model.layout
    }

    /// Plot (coordinate) area left after every component was placed.
    #[must_use]
    pub fn plot_bbox(&self) -> BBox {
        self.core.model.layout.plot
    }

    /// Drawn scrollbar box, excluding the reserved gap.
    #[must_use]
    pub fn scrollbar_bbox(&self) -> Option<BBox> {
        self.core
            .model
            .layout
            .scrollbar
            .map(|scrollbar| scrollbar.component.bbox)
    }

    /// Scrollbar box including the gap reserved toward the plot area.
    #[must_use]
    pub fn scrollbar_layout_bbox(&self) -> Option<BBox> {
        self.core
            .model
            .layout
            .scrollbar
            .map(|scrollbar| scrollbar.component.layout_bbox)
    }

    #[must_use]
    pub fn track_geometry(&self) -> Option<TrackGeometry> {
        self.core.model.layout.track()
    }
}
