use serde::{Deserialize, Serialize};

use crate::core::{CategoryWindow, ScrollState, Viewport};
use crate::interaction::InteractionMode;
use crate::layout::LayoutSnapshot;
use crate::render::Renderer;

use super::ChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub scroll: ScrollState,
    pub window: Option<CategoryWindow>,
    pub category_count: usize,
    pub filtered_len: usize,
    pub visible_categories: Vec<String>,
    pub interaction_mode: InteractionMode,
    pub layout: LayoutSnapshot,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        EngineSnapshot {
            viewport: model.viewport,
            scroll: model.scroll.state(),
            window: model.window,
            category_count: model.categories.len(),
            filtered_len: model.filtered.len(),
            visible_categories: self
                .visible_categories()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            interaction_mode: model.interaction.mode(),
            layout: model.layout.clone(),
        }
    }
}
