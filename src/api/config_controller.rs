use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::{validate_axis_label_config, validate_scrollbar_config, validate_theme};
use super::{
    AxisLabelConfig, ChartEngine, ChartEngineConfig, ChartTheme, LegendConfig, ScrollbarConfig,
};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.core.config
    }

    /// Adds, replaces or removes (`None`) the scrollbar and re-runs layout.
    pub fn set_scrollbar_config(&mut self, scrollbar: Option<ScrollbarConfig>) -> ChartResult<()> {
        if let Some(scrollbar) = scrollbar {
            validate_scrollbar_config(scrollbar)?;
            self.core.model.interaction.set_paging(scrollbar.paging);
        }
        debug!(enabled = scrollbar.is_some(), "set scrollbar config");
        self.core.config.scrollbar = scrollbar;
        self.apply_config_change();
        Ok(())
    }

    pub fn set_legend_config(&mut self, legend: LegendConfig) {
        debug!(visible = legend.visible, position = ?legend.position, "set legend config");
        self.core.config.legend = legend;
        self.apply_config_change();
    }

    pub fn set_category_axis_config(&mut self, axis: AxisLabelConfig) -> ChartResult<()> {
        self.core.config.category_axis = validate_axis_label_config(axis)?;
        self.apply_config_change();
        Ok(())
    }

    /// Replaces the theme. Only colors change, so no layout pass runs.
    pub fn set_theme(&mut self, theme: ChartTheme) -> ChartResult<()> {
        validate_theme(&theme)?;
        self.core.config.theme = theme;
        self.mark_needs_render();
        Ok(())
    }

    fn apply_config_change(&mut self) {
        self.mark_needs_render();
        let outcome = self.refresh_layout();
        self.emit_refresh_events(outcome);
    }
}
