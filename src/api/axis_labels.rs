use crate::core::{DEFAULT_VALUE_TICK_COUNT, Datum, format_tick, nice_ticks, tick_step};

/// "Nice" value-axis ticks spanning the numeric `field` of `records`.
///
/// Without numeric values the ticks fall back to the `[0, 1]` domain.
pub(super) fn value_ticks(records: &[Datum], field: &str) -> Vec<f64> {
    let (min, max) = records
        .iter()
        .filter_map(|record| record.number(field))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    if min > max {
        return nice_ticks(0.0, 0.0, DEFAULT_VALUE_TICK_COUNT);
    }
    nice_ticks(min, max, DEFAULT_VALUE_TICK_COUNT)
}

pub(super) fn tick_labels(ticks: &[f64]) -> Vec<String> {
    let step = tick_step(ticks);
    ticks.iter().map(|tick| format_tick(*tick, step)).collect()
}
