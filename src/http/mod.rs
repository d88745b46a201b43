//! HTTP host subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → routing registry (resolve path → route entry)
//!     → response.rs (page shell with route title, or 404 shell)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, REQUEST_ID_HEADER};
pub use server::{AppState, HttpServer};
