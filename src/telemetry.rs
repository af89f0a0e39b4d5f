//! Tracing setup for hosts embedding `chart-scroll`.
//!
//! Layout passes, window changes, value commits and drag transitions are
//! reported through `tracing`. Hosts either call `init_default_tracing` or
//! install their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber. `RUST_LOG` overrides [`DEFAULT_TRACING_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
