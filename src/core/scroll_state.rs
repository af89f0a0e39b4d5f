use serde::{Deserialize, Serialize};

/// Normalized scroll position plus the visible fraction of the category range.
///
/// `ratio` is always in `[0, 1]`, `thumb_ratio` in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    ratio: f64,
    thumb_ratio: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            ratio: 0.0,
            thumb_ratio: 1.0,
        }
    }
}

impl ScrollState {
    #[must_use]
    pub fn new(ratio: f64, thumb_ratio: f64) -> Self {
        Self {
            ratio: clamp_ratio(ratio).unwrap_or(0.0),
            thumb_ratio: clamp_thumb_ratio(thumb_ratio),
        }
    }

    #[must_use]
    pub fn ratio(self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn thumb_ratio(self) -> f64 {
        self.thumb_ratio
    }
}

/// Outcome of a `set_value` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ValueChange {
    Unchanged,
    Changed { previous: f64, current: f64 },
}

impl ValueChange {
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Sole owner of the chart's [`ScrollState`].
///
/// Layout and rendering code only read the state; every write goes through
/// [`ScrollController::set_value`] or [`ScrollController::set_thumb_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollController {
    state: ScrollState,
}

impl ScrollController {
    #[must_use]
    pub fn state(self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.state.ratio
    }

    #[must_use]
    pub fn thumb_ratio(self) -> f64 {
        self.state.thumb_ratio
    }

    /// Clamps `value` into `[0, 1]` and commits it.
    ///
    /// Out-of-range input is never an error. `NaN` leaves the state untouched.
    /// Committing the current value again reports `Unchanged` so callers can
    /// skip redundant refresh work.
    pub fn set_value(&mut self, value: f64) -> ValueChange {
        let Some(clamped) = clamp_ratio(value) else {
            return ValueChange::Unchanged;
        };
        let previous = self.state.ratio;
        if clamped == previous {
            return ValueChange::Unchanged;
        }
        self.state.ratio = clamped;
        ValueChange::Changed {
            previous,
            current: clamped,
        }
    }

    /// Replaces the visible fraction. Returns `true` when it changed.
    pub fn set_thumb_ratio(&mut self, thumb_ratio: f64) -> bool {
        let clamped = clamp_thumb_ratio(thumb_ratio);
        if clamped == self.state.thumb_ratio {
            return false;
        }
        self.state.thumb_ratio = clamped;
        true
    }

    /// Returns the state to its initial value without replacing the controller.
    pub fn reset(&mut self) {
        self.state = ScrollState::default();
    }
}

fn clamp_ratio(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(0.0, 1.0))
}

fn clamp_thumb_ratio(value: f64) -> f64 {
    // Nothing meaningful to show below zero; fall back to the full range.
    if value.is_nan() || value <= 0.0 {
        return 1.0;
    }
    value.min(1.0)
}
