//! Redirection route installation.
//!
//! # Responsibilities
//! - Detect sources that collide with the route table or with each other,
//!   including patterns that differ only in capture names
//! - Check the host can serve every source and destination
//! - Bind one 301 handler per redirection, in input order
//!
//! # Design Decisions
//! - Every check completes before the first bind, so a failure installs nothing
//! - Collisions are judged by a scratch matchit router, never by handlers

use indexmap::IndexSet;
use thiserror::Error;

use crate::host::{PatternSet, RouteError, RouteTable};
use crate::redirect::handler::RedirectResponder;
use crate::redirect::model::Redirection;

/// Sources that collide with existing routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route conflicts detected: {paths:?}")]
pub struct ConflictError {
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Sources the host cannot route or destinations it cannot send.
    #[error("host cannot serve redirections: {entries:?}")]
    Unsupported { entries: Vec<String> },
}

/// Install `redirections` into `table`. All-or-nothing.
pub fn install<T>(table: &mut T, redirections: &[Redirection]) -> Result<(), InstallError>
where
    T: RouteTable + ?Sized,
{
    let existing = table.registered_paths();
    let mut admitted = PatternSet::from_paths(existing.iter().map(String::as_str));

    let mut conflicts = IndexSet::new();
    let mut unsupported = IndexSet::new();
    let mut responders = Vec::with_capacity(redirections.len());
    for redirection in redirections {
        match admitted.insert(redirection.source()) {
            Ok(()) => {}
            Err(RouteError::Duplicate(_) | RouteError::Conflict { .. }) => {
                conflicts.insert(redirection.source().to_string());
            }
            Err(RouteError::Unsupported(_)) => {
                unsupported.insert(redirection.source().to_string());
            }
        }
        match RedirectResponder::new(redirection) {
            Ok(responder) => responders.push(responder),
            Err(_) => {
                unsupported.insert(redirection.destination().to_string());
            }
        }
    }

    if !conflicts.is_empty() {
        tracing::warn!(conflicts = ?conflicts, "Redirection sources collide with existing routes");
        return Err(ConflictError {
            paths: conflicts.into_iter().collect(),
        }
        .into());
    }
    if !unsupported.is_empty() {
        tracing::warn!(entries = ?unsupported, "Host cannot serve redirections");
        return Err(InstallError::Unsupported {
            entries: unsupported.into_iter().collect(),
        });
    }

    for (redirection, responder) in redirections.iter().zip(responders) {
        let label = redirection.handler_name();
        table.bind(redirection.source(), &label, responder.into_method_router());
        tracing::debug!(
            source = %redirection.source(),
            destination = %redirection.destination(),
            "Redirection installed"
        );
    }

    if !redirections.is_empty() {
        tracing::info!(count = redirections.len(), "Redirections installed");
    }
    Ok(())
}
