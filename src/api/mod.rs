//! Public chart facade.
//!
//! `ChartEngine` is split across per-concern files, each contributing one
//! `impl<R: Renderer> ChartEngine<R>` block.

mod axis_labels;
mod chart_model;
mod chart_runtime;
mod config_controller;
mod data_controller;
mod data_window;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod layout_coordinator;
mod lifecycle;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod scroll_controller;
mod scrollbar_style;
mod validation;

pub use chart_model::ChartModel;
pub use engine::ChartEngine;
pub use engine_config::{
    AxisLabelConfig, ChartEngineConfig, ChartTheme, DEFAULT_CATEGORY_SIZE_PX, LegendConfig,
    ScrollbarConfig, ScrollbarDefaultTheme, ScrollbarHoverTheme, ScrollbarStyleConfig,
    ScrollbarTheme,
};
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use layout_coordinator::MAX_REFILTER_PASSES;
pub use scrollbar_style::{ScrollbarElementHandle, ScrollbarStyle, resolve_scrollbar_style};

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
