use tracing::debug;

use crate::core::BBox;
use crate::error::ChartResult;
use crate::layout::{LayoutRequest, negotiate_layout};
use crate::render::Renderer;

use super::validation::validate_engine_config;
use super::{
    ChartEngine, ChartEngineConfig, ChartModel, chart_runtime::ChartRuntimeState,
    engine_core::EngineCore,
};

impl<R: Renderer> ChartEngine<R> {
    /// Creates a fully initialized engine with an empty dataset.
    ///
    /// The first layout pass runs before this returns, so geometry getters
    /// are valid immediately.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_engine_config(&config)?;

        let canvas = BBox::new(
            0.0,
            0.0,
            f64::from(config.viewport.width),
            f64::from(config.viewport.height),
        );
        let mut request = LayoutRequest::new(canvas);
        request.padding = config.padding;
        let mut model = ChartModel::new(config.viewport, negotiate_layout(&request));
        if let Some(scrollbar) = config.scrollbar {
            model.interaction.set_paging(scrollbar.paging);
        }

        let mut engine = Self {
            renderer,
            core: EngineCore {
                config,
                model,
                runtime: ChartRuntimeState::pending_first_render(),
            },
        };
        let _ = engine.refresh_layout();
        debug!(
            width = engine.core.model.viewport.width,
            height = engine.core.model.viewport.height,
            scrollbar = engine.core.config.scrollbar.is_some(),
            "chart engine initialized"
        );
        Ok(engine)
    }

    /// Creates an engine from a JSON config document.
    pub fn from_json_config(renderer: R, input: &str) -> ChartResult<Self> {
        Self::new(renderer, ChartEngineConfig::from_json_str(input)?)
    }
}
