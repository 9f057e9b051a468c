//! Plugin surface exposed to the host application.

use thiserror::Error;

use crate::host::HostApp;
use crate::redirect::{self, InstallError, RawRedirections, ValidationError};

/// Name the redirections plugin is configured under.
pub const REDIRECTIONS_PLUGIN: &str = "redirections";

/// Error from a plugin's `process` step. Fatal to startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PluginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Install(#[from] InstallError),
}

/// A unit of host setup driven by its own config section.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    /// Mutate `host` and hand it back for further setup.
    fn process(&self, host: HostApp) -> Result<HostApp, PluginError>;
}

/// Registers 301 routes from a source → destination mapping.
#[derive(Debug, Clone, Default)]
pub struct RedirectionsPlugin {
    config: RawRedirections,
}

impl RedirectionsPlugin {
    pub fn new(config: RawRedirections) -> Self {
        Self { config }
    }
}

impl Plugin for RedirectionsPlugin {
    fn name(&self) -> &str {
        REDIRECTIONS_PLUGIN
    }

    fn process(&self, host: HostApp) -> Result<HostApp, PluginError> {
        run(host, &self.config)
    }
}

/// Parse `raw`, install the result into `host`, and return `host`.
pub fn run(mut host: HostApp, raw: &RawRedirections) -> Result<HostApp, PluginError> {
    let redirections = redirect::parse(raw)?;
    redirect::install(&mut host, &redirections)?;
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect::ConflictError;
    use axum::routing::get;

    fn raw(entries: &[(&str, &str)]) -> RawRedirections {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), toml::Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn test_run_returns_host_with_routes() {
        let host = run(HostApp::new(), &raw(&[("/old-path", "/new-path")])).unwrap();
        assert_eq!(host.label("/old-path"), Some("/old-path-/new-path"));
    }

    #[test]
    fn test_plugin_process() {
        let plugin = RedirectionsPlugin::new(raw(&[("/a", "/b")]));
        assert_eq!(plugin.name(), "redirections");

        let host = plugin.process(HostApp::new()).unwrap();
        assert!(host.contains("/a"));
    }

    #[test]
    fn test_validation_error_propagates() {
        let err = run(HostApp::new(), &raw(&[("bad", "/ok"), ("/ok2", "bad2")])).unwrap_err();
        assert_eq!(
            err,
            PluginError::Validation(ValidationError::InvalidUrls {
                urls: vec!["bad".into(), "bad2".into()]
            })
        );
    }

    #[test]
    fn test_conflict_error_propagates() {
        let mut host = HostApp::new();
        host.route("/taken", "existing", get(|| async { "" })).unwrap();

        let err = run(host, &raw(&[("/taken", "/new")])).unwrap_err();
        assert_eq!(
            err,
            PluginError::Install(InstallError::Conflict(ConflictError {
                paths: vec!["/taken".into()]
            }))
        );
    }
}
