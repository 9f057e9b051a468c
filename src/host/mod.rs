//! Host application subsystem.
//!
//! # Data Flow
//! ```text
//! HostApp::new()
//!     → built-in routes (startup)
//!     → plugins bind routes through the RouteTable trait
//!     → into_router() freezes the axum Router for serving
//! ```
//!
//! # Design Decisions
//! - axum cannot enumerate its routes, so HostApp keeps its own path registry
//! - Registry and Router are only mutated together
//! - Patterns are admitted through a scratch matchit router, the matcher
//!   axum uses, so `Router::route` never sees one it would panic on

pub mod app;
pub mod patterns;
pub mod table;

pub use app::{HostApp, RouteError, RouteInfo};
pub use patterns::PatternSet;
pub use table::RouteTable;
