//! Route pattern admission.
//!
//! axum panics inside `Router::route` when a path fails its prefix checks or
//! when matchit refuses the insert. `PatternSet` runs the same checks against
//! a scratch matchit router so callers learn about it as a `RouteError`.

use std::fmt;

use matchit::InsertError;

use crate::host::app::RouteError;

/// Patterns accepted so far, as axum's matcher would see them.
#[derive(Clone, Default)]
pub struct PatternSet {
    matcher: matchit::Router<()>,
    patterns: Vec<String>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from patterns that are already served. Any that fail are skipped.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for path in paths {
            if let Err(e) = set.insert(path) {
                tracing::warn!(path = %path, error = %e, "Existing route not admitted");
            }
        }
        set
    }

    /// Admit `pattern`, or explain why axum would refuse it.
    pub fn insert(&mut self, pattern: &str) -> Result<(), RouteError> {
        if !has_valid_prefixes(pattern) {
            return Err(RouteError::Unsupported(pattern.to_string()));
        }

        match self.matcher.insert(pattern, ()) {
            Ok(()) => {
                self.patterns.push(pattern.to_string());
                Ok(())
            }
            Err(InsertError::Conflict { with }) if with == pattern => {
                Err(RouteError::Duplicate(pattern.to_string()))
            }
            Err(InsertError::Conflict { with }) => Err(RouteError::Conflict {
                path: pattern.to_string(),
                existing: with,
            }),
            Err(_) => Err(RouteError::Unsupported(pattern.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.patterns).finish()
    }
}

/// Leading slash, and no segment in the legacy `:param` / `*rest` syntax.
fn has_valid_prefixes(pattern: &str) -> bool {
    pattern.starts_with('/')
        && pattern
            .split('/')
            .all(|segment| !segment.starts_with(':') && !segment.starts_with('*'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_axum_syntax() {
        let mut set = PatternSet::new();
        for pattern in ["/", "/users/{id}", "/files/{*path}", "/static/<path:filename>"] {
            set.insert(pattern).unwrap();
        }
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_rejects_bad_prefixes() {
        let mut set = PatternSet::new();
        for pattern in ["", "users", "https://example.com/x", "/users/:id", "/files/*path"] {
            assert_eq!(
                set.insert(pattern),
                Err(RouteError::Unsupported(pattern.to_string())),
                "{pattern}"
            );
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_rejects_malformed_captures() {
        let mut set = PatternSet::new();
        for pattern in ["/a/{", "/a/{}", "/{*rest}/tail"] {
            assert_eq!(
                set.insert(pattern),
                Err(RouteError::Unsupported(pattern.to_string())),
                "{pattern}"
            );
        }
    }

    #[test]
    fn test_duplicate_and_capture_conflicts() {
        let mut set = PatternSet::new();
        set.insert("/a/{x}").unwrap();

        assert_eq!(set.insert("/a/{x}"), Err(RouteError::Duplicate("/a/{x}".into())));
        assert!(matches!(
            set.insert("/a/{y}"),
            Err(RouteError::Conflict { path, .. }) if path == "/a/{y}"
        ));
        // Static segments may sit beside a capture.
        set.insert("/a/b").unwrap();
    }

    #[test]
    fn test_from_paths_skips_bad_entries() {
        let set = PatternSet::from_paths(["/ok", "nope", "/ok"]);
        assert_eq!(set.len(), 1);
    }
}
