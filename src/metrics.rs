//! Service counters.
//!
//! Thin wrappers over the `metrics` macros. Without a recorder installed the
//! macros are no-ops.

use metrics::{counter, describe_counter};
use tracing::debug;

/// HTTP requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Application startups counter metric name.
pub const METRIC_APP_STARTUPS: &str = "app_startup_total";
/// Application shutdowns counter metric name.
pub const METRIC_APP_SHUTDOWNS: &str = "app_shutdown_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(METRIC_APP_STARTUPS, "Total number of application startups");
    describe_counter!(METRIC_APP_SHUTDOWNS, "Total number of application shutdowns");

    debug!("Metrics initialized");
}

/// Increment the request counter for a route.
pub fn inc_requests(route: &str) {
    counter!(METRIC_HTTP_REQUESTS, "route" => route.to_string()).increment(1);
}

/// Increment the startup counter.
pub fn inc_startups() {
    counter!(METRIC_APP_STARTUPS).increment(1);
}

/// Increment the shutdown counter.
pub fn inc_shutdowns() {
    counter!(METRIC_APP_SHUTDOWNS).increment(1);
}
