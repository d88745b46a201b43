//! FAQ section of the documentation site.
//!
//! Declares the FAQ pages and the child route table the host mounts under
//! its FAQ prefix (`faq` by default).

use crate::pages::Component;
use crate::routing::{RouteEntry, RouteError, RouteRegistry, RouteTable};

pub static GLOBAL_PREFIX: Component =
    Component::new("GlobalPrefixComponent", "app-global-prefix");
pub static LIFECYCLE_EVENTS: Component =
    Component::new("LifecycleEventsComponent", "app-lifecycle-events");
pub static HYBRID_APPLICATION: Component =
    Component::new("HybridApplicationComponent", "app-hybrid-application");
pub static MULTIPLE_SERVERS: Component =
    Component::new("MultipleServersComponent", "app-multiple-servers");
pub static HTTP_ADAPTER: Component = Component::new("HttpAdapterComponent", "app-http-adapter");

/// Every component this section declares.
pub static DECLARATIONS: [&Component; 5] = [
    &GLOBAL_PREFIX,
    &LIFECYCLE_EVENTS,
    &HYBRID_APPLICATION,
    &MULTIPLE_SERVERS,
    &HTTP_ADAPTER,
];

/// Build the FAQ route table. Every entry of [`DECLARATIONS`] must be routed.
pub fn routes() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        RouteEntry::new("global-prefix", &GLOBAL_PREFIX, "Global prefix - FAQ"),
        RouteEntry::new("lifecycle-events", &LIFECYCLE_EVENTS, "Lifecycle events - FAQ"),
        RouteEntry::new("hybrid-application", &HYBRID_APPLICATION, "Hybrid application - FAQ"),
        RouteEntry::new(
            "multiple-servers",
            &MULTIPLE_SERVERS,
            "HTTPS & Multiple Servers - FAQ",
        ),
        RouteEntry::new("http-adapter", &HTTP_ADAPTER, "HTTP adapter - FAQ"),
    ])?
    .ensure_routed(&DECLARATIONS)
}

/// Mount the FAQ routes under `prefix`.
pub fn register(registry: &mut RouteRegistry, prefix: &str) -> Result<(), RouteError> {
    routes()?.register(registry, prefix)
}
