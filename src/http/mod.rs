//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve, middleware layers)
//!     → request id assigned and propagated
//!     → HostApp router (health, redirects, ...)
//!     → response
//! ```

pub mod server;

pub use server::HttpServer;
