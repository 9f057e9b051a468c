//! Route table interface used by plugins.

use std::collections::HashSet;

use axum::routing::MethodRouter;

/// The part of a host application a plugin may see.
///
/// Admission is checked up front: seed a [`PatternSet`](crate::host::PatternSet)
/// from [`registered_paths`](RouteTable::registered_paths) and insert every
/// new pattern into it. Once that has passed, [`bind`](RouteTable::bind)
/// cannot fail.
pub trait RouteTable {
    /// Snapshot of every registered path pattern.
    fn registered_paths(&self) -> HashSet<String>;

    /// Bind `handler` at `pattern`, recording `label` as route metadata.
    fn bind(&mut self, pattern: &str, label: &str, handler: MethodRouter);
}
