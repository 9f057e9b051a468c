//! Redirection value type.

/// Prefixes a source or destination may start with.
const URL_PREFIXES: [&str; 3] = ["/", "http://", "https://"];

/// A validated source path → destination URL pair.
///
/// Only the parser constructs these, so both fields always satisfy
/// [`is_url_shaped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    source: String,
    destination: String,
}

impl Redirection {
    pub(crate) fn new(source: String, destination: String) -> Self {
        Self { source, destination }
    }

    /// Path pattern the host router matches against.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Value returned in the `Location` header.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Human-readable label the route is registered under.
    pub fn handler_name(&self) -> String {
        format!("{}-{}", self.source, self.destination)
    }
}

/// Returns true if `url` is path-absolute or an absolute http(s) URL.
///
/// The empty string never matches.
pub fn is_url_shaped(url: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}
