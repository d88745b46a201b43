//! Metrics collection and exposition.
//!
//! # Metrics
//! - `faq_route_resolutions_total` (counter): lookups by `outcome` (hit, miss)
//! - `faq_route_resolution_duration_seconds` (histogram): registry lookup time
//!
//! Without an installed recorder every call is a no-op, so the counters are
//! always recorded and the exporter is optional.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

pub const RESOLUTIONS_TOTAL: &str = "faq_route_resolutions_total";
pub const RESOLUTION_DURATION: &str = "faq_route_resolution_duration_seconds";

/// Install the Prometheus exporter on `addr`. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one route resolution. `start` is taken just before the lookup.
pub fn record_resolution(hit: bool, start: Instant) {
    let outcome = if hit { "hit" } else { "miss" };
    counter!(RESOLUTIONS_TOTAL, "outcome" => outcome).increment(1);
    histogram!(RESOLUTION_DURATION, "outcome" => outcome).record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        assert_eq!(RESOLUTION_DURATION, "faq_route_resolution_duration_seconds");
        assert!(RESOLUTIONS_TOTAL.ends_with("_total"));
    }

    #[test]
    fn test_record_without_recorder() {
        record_resolution(true, Instant::now());
        record_resolution(false, Instant::now());
    }
}
