use indexmap::IndexSet;

use crate::core::{CategoryWindow, Datum, ScrollController, Viewport};
use crate::interaction::InteractionState;
use crate::layout::LayoutSnapshot;

/// Mutable chart state owned by the engine.
///
/// Records, the derived category sequence, the scroll controller and the
/// published layout live together so every refresh can replace them as one
/// consistent set.
pub struct ChartModel {
    pub(super) viewport: Viewport,
    pub(super) records: Vec<Datum>,
    pub(super) categories: IndexSet<String>,
    pub(super) series: IndexSet<String>,
    pub(super) scroll: ScrollController,
    pub(super) window: Option<CategoryWindow>,
    pub(super) filtered: Vec<Datum>,
    pub(super) layout: LayoutSnapshot,
    pub(super) interaction: InteractionState,
}

impl ChartModel {
    #[must_use]
    pub fn new(viewport: Viewport, layout: LayoutSnapshot) -> Self {
        Self {
            viewport,
            records: Vec::new(),
            categories: IndexSet::new(),
            series: IndexSet::new(),
            scroll: ScrollController::default(),
            window: None,
            filtered: Vec::new(),
            layout,
            interaction: InteractionState::default(),
        }
    }
}
