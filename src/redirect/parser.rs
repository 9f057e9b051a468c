//! Redirection config parsing and validation.
//!
//! # Responsibilities
//! - Reject entries whose value is not a string
//! - Reject keys and values that are not URL-shaped
//! - Preserve the mapping's order in the output
//!
//! # Design Decisions
//! - Type check runs first; URL-shape only runs on all-string input
//! - Each check collects every offender before failing
//! - Pure function of its input (no I/O)

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use crate::redirect::model::{is_url_shaped, Redirection};

/// Raw plugin config as it comes out of the config file.
pub type RawRedirections = IndexMap<String, toml::Value>;

/// Error returned when the redirection config is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Entries whose value is not a string, rendered as `key = value`.
    #[error("all keys and values must be strings, got: {}", .entries.join(", "))]
    NonString { entries: Vec<String> },

    /// Keys or values that fail the URL-shape check, each listed once.
    #[error("invalid URLs found: {urls:?}")]
    InvalidUrls { urls: Vec<String> },
}

/// Parse and validate a raw source → destination mapping.
pub fn parse(config: &RawRedirections) -> Result<Vec<Redirection>, ValidationError> {
    let non_string: Vec<String> = config
        .iter()
        .filter(|(_, value)| !value.is_str())
        .map(|(key, value)| format!("{key} = {value}"))
        .collect();
    if !non_string.is_empty() {
        return Err(ValidationError::NonString { entries: non_string });
    }

    parse_pairs(
        config
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v))),
    )
}

/// Parse pairs already known to be strings. Only the URL-shape check applies.
pub fn parse_pairs<I, K, V>(pairs: I) -> Result<Vec<Redirection>, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let redirections: Vec<Redirection> = pairs
        .into_iter()
        .map(|(source, destination)| Redirection::new(source.into(), destination.into()))
        .collect();

    let invalid: IndexSet<&str> = redirections
        .iter()
        .flat_map(|r| [r.source(), r.destination()])
        .filter(|url| !is_url_shaped(url))
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidUrls {
            urls: invalid.into_iter().map(str::to_owned).collect(),
        });
    }

    Ok(redirections)
}
