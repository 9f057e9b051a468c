//! axum-backed host application.

use std::collections::HashSet;
use std::mem;

use axum::{routing::MethodRouter, Router};
use thiserror::Error;

use crate::host::patterns::PatternSet;
use crate::host::table::RouteTable;

/// A registered route as seen by introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub path: String,
    pub label: String,
}

/// Error returned by [`HostApp::route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route already registered: {0}")]
    Duplicate(String),

    /// Same shape as an existing route, e.g. differing only in capture names.
    #[error("route {path} conflicts with {existing}")]
    Conflict { path: String, existing: String },

    #[error("unsupported route pattern: {0}")]
    Unsupported(String),
}

/// Host application: an axum router plus a registry of its paths.
#[derive(Debug, Default)]
pub struct HostApp {
    router: Router,
    routes: Vec<RouteInfo>,
    patterns: PatternSet,
}

impl HostApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route, rejecting anything axum would refuse.
    pub fn route(
        &mut self,
        path: &str,
        label: &str,
        handler: MethodRouter,
    ) -> Result<&mut Self, RouteError> {
        self.patterns.insert(path)?;
        self.push_route(path, label, handler);
        Ok(self)
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|r| r.path == path)
    }

    /// Label of the route registered at `path`.
    pub fn label(&self, path: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.label.as_str())
    }

    /// Freeze into a servable router.
    pub fn into_router(self) -> Router {
        self.router
    }

    fn push_route(&mut self, path: &str, label: &str, handler: MethodRouter) {
        self.router = mem::take(&mut self.router).route(path, handler);
        self.routes.push(RouteInfo {
            path: path.to_string(),
            label: label.to_string(),
        });
        tracing::trace!(path = %path, label = %label, "Route bound");
    }
}

impl RouteTable for HostApp {
    fn registered_paths(&self) -> HashSet<String> {
        self.routes.iter().map(|r| r.path.clone()).collect()
    }

    fn bind(&mut self, pattern: &str, label: &str, handler: MethodRouter) {
        if let Err(e) = self.route(pattern, label, handler) {
            tracing::error!(path = %pattern, error = %e, "Route skipped: pattern was not checked before bind");
        }
    }
}
