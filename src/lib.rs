//! chart-scroll: scrollbar, data-window and layout negotiation core for
//! category charts.
//!
//! The crate keeps a strict split between pure geometry/state (`core`,
//! `layout`, `interaction`) and the `ChartEngine` facade (`api`) that wires
//! them to data, plugins and a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
