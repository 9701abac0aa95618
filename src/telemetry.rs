//! Telemetry helpers for applications embedding `hawk-chart`.
//!
//! The crate only emits `tracing` events; installing a subscriber is left to
//! the host. `init_default_tracing` is a shortcut for hosts without one.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is
/// enabled, filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when the feature is disabled or the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
