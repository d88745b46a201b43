//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing and HTTP produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution counters, latency histogram)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
