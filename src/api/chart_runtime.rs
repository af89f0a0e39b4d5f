use crate::extensions::ChartPlugin;

/// Runtime orchestration state grouped separately from model/config.
pub(super) struct ChartRuntimeState {
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) needs_render: bool,
    pub(super) destroyed: bool,
}

impl ChartRuntimeState {
    #[must_use]
    pub(super) fn pending_first_render() -> Self {
        Self {
            plugins: Vec::new(),
            needs_render: true,
            destroyed: false,
        }
    }
}
