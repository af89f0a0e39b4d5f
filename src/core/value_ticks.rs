/// Target tick count used for the value axis.
pub const DEFAULT_VALUE_TICK_COUNT: usize = 5;

/// Upper bound on emitted ticks, as a multiple of the requested count.
const MAX_TICKS_PER_TARGET: usize = 4;

/// Builds evenly stepped ticks covering `[min, max]` with a 1/2/5 × 10ⁿ step.
///
/// The domain is widened to include zero, matching how bar-like geometries
/// grow from a zero baseline. Non-finite input, or a domain whose widened
/// bounds overflow `f64`, yields no ticks.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || target_count == 0 {
        return Vec::new();
    }

    let mut low = min.min(max).min(0.0);
    let mut high = max.max(min).max(0.0);
    if high == low {
        high = low + 1.0;
    }
    let step = nice_step((high - low) / (target_count.max(2) - 1) as f64);
    low = (low / step).floor() * step;
    high = (high / step).ceil() * step;
    let span = (high - low) / step;
    if !low.is_finite() || !high.is_finite() || !span.is_finite() {
        return Vec::new();
    }

    let count = (span.round() as usize).min(target_count.max(2) * MAX_TICKS_PER_TARGET);
    let mut ticks: Vec<f64> = (0..=count)
        .map(|index| snap_to_step(low + step * index as f64, step))
        .collect();
    ticks.dedup_by(|lhs, rhs| approx_equal(*lhs, *rhs));
    ticks
}

/// Smallest "nice" step not below `raw_step`.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powi(raw_step.log10().floor() as i32);
    let fraction = raw_step / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Formats a tick with just enough decimals for `step`.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Step between the first two ticks, or `1.0` for shorter sequences.
#[must_use]
pub fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [first, second, ..] => (second - first).abs(),
        _ => 1.0,
    }
}

fn snap_to_step(value: f64, step: f64) -> f64 {
    let snapped = (value / step).round() * step;
    if approx_equal(snapped, value) {
        snapped
    } else {
        value
    }
}

fn approx_equal(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= scale * 1e-12
}
