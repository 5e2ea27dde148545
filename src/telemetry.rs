//! Opt-in log output for tick selection.
//!
//! The crate never installs a subscriber on its own. Scored candidates are
//! emitted at `trace`, the chosen scale and the numeric/calendar/regular
//! dispatch at `debug`, and `NoUsableScale` failures at `warn`. Hosts that
//! already run a subscriber get these events for free; others can enable the
//! `telemetry` feature and call one of the helpers below.

/// Filter used when `RUST_LOG` is unset: only this crate, `info` and above.
pub const DEFAULT_FILTER: &str = "tickwise=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"tickwise=trace"` to see every scored candidate.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
