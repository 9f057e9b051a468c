//! Redirection subsystem.
//!
//! # Data Flow
//! ```text
//! plugin config (source → destination mapping)
//!     → parser.rs (type + URL-shape validation)
//!     → Vec<Redirection> (ordered, immutable)
//!     → installer.rs (conflict check against the route table)
//!     → handler.rs (one 301 handler per redirection)
//!     → HostApp route table mutated in place
//! ```
//!
//! # Design Decisions
//! - Validation reports every offender in one error, not just the first
//! - Installation is all-or-nothing: every check runs before the first bind
//! - Route labels are `"{source}-{destination}"` for introspection

pub mod handler;
pub mod installer;
pub mod model;
pub mod parser;

pub use installer::{install, ConflictError, InstallError};
pub use model::{is_url_shaped, Redirection};
pub use parser::{parse, parse_pairs, RawRedirections, ValidationError};
