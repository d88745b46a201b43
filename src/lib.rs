//! Documentation site FAQ routes and the host that serves them.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteEntry, RouteError, RouteRegistry, RouteTable};
