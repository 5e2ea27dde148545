use tickwise::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with_filter};

#[test]
fn default_filter_targets_this_crate() {
    assert_eq!(DEFAULT_FILTER, "tickwise=info");
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn helpers_are_noops_without_the_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("tickwise=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn only_the_first_subscriber_is_installed() {
    assert!(init_tracing_with_filter("tickwise=trace"));
    assert!(!init_default_tracing());
}
