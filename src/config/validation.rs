//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, log level and timeout ranges
//! - Check every plugin entry names a known, unique plugin
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Plugin-specific settings are left to the plugin's own parser

use std::collections::HashSet;
use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::AppConfig;
use crate::plugin::REDIRECTIONS_PLUGIN;

/// Plugins the server knows how to build.
pub const KNOWN_PLUGINS: &[&str] = &[REDIRECTIONS_PLUGIN];

/// A single semantic problem in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check `config`, collecting every issue found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ConfigIssue>> {
    let mut issues = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        issues.push(ConfigIssue::new(
            "listener.bind_address",
            format!("invalid socket address '{}'", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        issues.push(ConfigIssue::new("timeouts.request_secs", "must be greater than 0"));
    }

    let observability = &config.observability;
    if observability.log_level.parse::<tracing::Level>().is_err() {
        issues.push(ConfigIssue::new(
            "observability.log_level",
            format!("unknown log level '{}'", observability.log_level),
        ));
    }
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        issues.push(ConfigIssue::new(
            "observability.metrics_address",
            format!("invalid socket address '{}'", observability.metrics_address),
        ));
    }

    let mut seen = HashSet::new();
    for (i, plugin) in config.plugins.iter().enumerate() {
        let field = format!("plugins[{i}].name");
        if !KNOWN_PLUGINS.contains(&plugin.name.as_str()) {
            issues.push(ConfigIssue::new(
                field,
                format!("unknown plugin '{}'", plugin.name),
            ));
        } else if !seen.insert(plugin.name.as_str()) {
            issues.push(ConfigIssue::new(
                field,
                format!("plugin '{}' configured more than once", plugin.name),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
