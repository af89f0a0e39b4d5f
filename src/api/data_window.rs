use crate::core::{CategoryWindow, Datum, TrackGeometry, compute_window, filter_records};
use crate::render::Renderer;

use super::ChartEngine;

/// Visible fraction implied by how many `category_size` slots fit on the track.
///
/// At least one category is always visible. Without a usable track, a
/// category size or any data, everything is visible.
pub(super) fn resolve_thumb_ratio(
    track: Option<TrackGeometry>,
    category_size: f64,
    category_count: usize,
) -> f64 {
    let Some(track) = track else {
        return 1.0;
    };
    if category_count == 0 || !track.is_interactive() || !(category_size > 0.0) {
        return 1.0;
    }
    let visible = (track.length / category_size).floor().max(1.0);
    (visible / category_count as f64).min(1.0)
}

impl<R: Renderer> ChartEngine<R> {
    /// Recomputes the category window and filtered records from the current
    /// scroll state. Returns `true` when the window moved or resized.
    pub(super) fn recompute_window(&mut self) -> bool {
        let model = &self.core.model;
        let category_field = self.core.config.category_field.as_str();
        let window = compute_window(
            model.categories.len(),
            model.scroll.value(),
            model.scroll.thumb_ratio(),
        );
        let filtered = match window {
            Some(window) => filter_records(&model.records, &model.categories, window, |record| {
                record.category_key(category_field)
            }),
            None => Vec::new(),
        };

        let changed = window != self.core.model.window;
        self.core.model.window = window;
        self.core.model.filtered = filtered;
        changed
    }

    /// Current contiguous window over the category sequence.
    #[must_use]
    pub fn category_window(&self) -> Option<CategoryWindow> {
        self.core.model.window
    }

    /// Records whose category falls inside the current window, in input order.
    #[must_use]
    pub fn filtered_data(&self) -> &[Datum] {
        &self.core.model.filtered
    }

    /// Category keys inside the current window.
    #[must_use]
    pub fn visible_categories(&self) -> Vec<&str> {
        match self.core.model.window {
            Some(window) => self
                .core
                .model
                .categories
                .iter()
                .skip(window.start_index)
                .take(window.size())
                .map(String::as_str)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_thumb_ratio;
    use crate::core::{Orientation, TrackGeometry};

    fn track(length: f64) -> TrackGeometry {
        TrackGeometry {
            orientation: Orientation::Horizontal,
            length,
            thickness: 8.0,
            x: 0.0,
            y: 0.0,
        }
    }

    #[test]
    fn thumb_ratio_counts_whole_category_slots() {
        assert_eq!(resolve_thumb_ratio(Some(track(313.68)), 32.0, 14), 9.0 / 14.0);
        assert_eq!(resolve_thumb_ratio(Some(track(453.68)), 32.0, 14), 1.0);
    }

    #[test]
    fn degenerate_inputs_show_everything() {
        assert_eq!(resolve_thumb_ratio(None, 32.0, 14), 1.0);
        assert_eq!(resolve_thumb_ratio(Some(track(0.0)), 32.0, 14), 1.0);
        assert_eq!(resolve_thumb_ratio(Some(track(300.0)), 32.0, 0), 1.0);
    }

    #[test]
    fn at_least_one_category_stays_visible() {
        assert_eq!(resolve_thumb_ratio(Some(track(10.0)), 32.0, 50), 1.0 / 50.0);
    }
}
