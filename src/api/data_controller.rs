use indexmap::IndexSet;
use tracing::debug;

use crate::core::{Datum, ordered_categories, parse_records_json};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the full dataset.
    ///
    /// The category sequence is rebuilt, the thumb is resized for the new
    /// category count and the window is clamped so it stays inside the new
    /// data even when the previous ratio pointed at the far end.
    pub fn set_data(&mut self, records: Vec<Datum>) {
        let category_field = self.core.config.category_field.as_str();
        let categories = ordered_categories(&records, |record| record.category_key(category_field));
        let series = match &self.core.config.series_field {
            Some(series_field) => {
                ordered_categories(&records, |record| record.category_key(series_field))
            }
            None => IndexSet::new(),
        };
        let keyless = records
            .iter()
            .filter(|record| record.category_key(category_field).is_none())
            .count();
        debug!(
            records_len = records.len(),
            categories_len = categories.len(),
            series_len = series.len(),
            keyless,
            "set data"
        );

        let records_len = records.len();
        self.core.model.records = records;
        self.core.model.categories = categories;
        self.core.model.series = series;
        self.reattach();
        self.mark_needs_render();
        let outcome = self.refresh_layout();
        self.emit_plugin_event(PluginEvent::DataChanged { records_len });
        self.emit_refresh_events(outcome);
    }

    /// Parses a JSON array of records and replaces the dataset with it.
    pub fn set_data_from_json(&mut self, input: &str) -> ChartResult<()> {
        let records = parse_records_json(input)?;
        self.set_data(records);
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[Datum] {
        &self.core.model.records
    }

    /// Number of distinct categories across the full dataset.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.core.model.categories.len()
    }

    /// Distinct category keys in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.core.model.categories.iter().map(String::as_str)
    }

    /// Distinct series keys in first-seen order.
    pub fn series(&self) -> impl Iterator<Item = &str> {
        self.core.model.series.iter().map(String::as_str)
    }
}
