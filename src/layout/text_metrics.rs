use ordered_float::OrderedFloat;

/// Deterministic, backend-independent label width estimate.
#[must_use]
pub fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}

/// Widest label in `labels`, or `0.0` when there are none.
#[must_use]
pub fn max_label_width_px(labels: &[String], font_size_px: f64) -> f64 {
    labels
        .iter()
        .map(|label| OrderedFloat(estimate_label_text_width_px(label, font_size_px)))
        .max()
        .map_or(0.0, |width| width.0)
}
