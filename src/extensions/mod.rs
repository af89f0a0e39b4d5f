//! Observer hooks hosts can attach to a chart engine.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
