//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteEntry[] (page module literal)
//!     → table.rs (validate: unique single-segment paths, titles)
//!     → registry.rs (mount under parent prefix)
//!     → Freeze as immutable Arc<RouteRegistry>
//!
//! Incoming path (e.g. /faq/global-prefix)
//!     → matcher.rs (normalize, strip mount prefix)
//!     → table.rs (exact segment lookup)
//!     → Return: Resolved entry or NotFound
//! ```
//!
//! # Design Decisions
//! - Tables validated once, immutable at runtime
//! - No regex, exact segment comparison only
//! - Deterministic: same input always resolves to the same entry

pub mod error;
pub mod matcher;
pub mod registry;
pub mod route;
pub mod table;

pub use error::RouteError;
pub use registry::{Link, Resolved, RouteRegistry};
pub use route::{RouteData, RouteEntry};
pub use table::RouteTable;
