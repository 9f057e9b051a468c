//! Startup orchestration.
//!
//! # Responsibilities
//! - Load config and bring up logging
//! - Create the host with its built-in routes
//! - Instantiate configured plugins
//! - Apply plugins in config order
//!
//! # Design Decisions
//! - Fail fast: the host never starts with a partially applied plugin
//! - Built-in routes are registered first so plugins see them as conflicts

use std::path::Path;

use axum::routing::get;
use thiserror::Error;

use crate::config::{load_config, AppConfig, ConfigError, PluginConfig};
use crate::host::{HostApp, RouteError};
use crate::observability::logging;
use crate::plugin::{Plugin, PluginError, RedirectionsPlugin, REDIRECTIONS_PLUGIN};

/// Path of the built-in liveness route.
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown plugin '{0}'")]
    UnknownPlugin(String),

    #[error("plugin '{name}' failed: {source}")]
    Plugin {
        name: String,
        #[source]
        source: PluginError,
    },

    #[error("built-in route: {0}")]
    Route(#[from] RouteError),
}

/// Everything the server needs short of a listener.
#[derive(Debug)]
pub struct Prepared {
    pub config: AppConfig,
    pub host: HostApp,
}

/// Load the config at `path`, start logging, and build the host.
///
/// Binds nothing, so it doubles as the `--check` path.
pub fn prepare(path: &Path) -> Result<Prepared, StartupError> {
    let config = load_config(path)?;
    logging::init(&config.observability);

    tracing::info!(
        config = %path.display(),
        bind_address = %config.listener.bind_address,
        plugins = config.plugins.len(),
        "Configuration loaded"
    );

    let host = build_host(&config)?;
    Ok(Prepared { config, host })
}

/// Build the host application described by `config`.
pub fn build_host(config: &AppConfig) -> Result<HostApp, StartupError> {
    let mut host = HostApp::new();
    host.route(HEALTH_PATH, "health", get(|| async { "ok" }))?;

    for plugin_config in &config.plugins {
        let plugin = instantiate(plugin_config)?;
        tracing::info!(plugin = %plugin.name(), "Applying plugin");
        host = plugin.process(host).map_err(|source| StartupError::Plugin {
            name: plugin.name().to_string(),
            source,
        })?;
    }

    tracing::info!(routes = host.routes().len(), "Host ready");
    Ok(host)
}

fn instantiate(config: &PluginConfig) -> Result<Box<dyn Plugin>, StartupError> {
    match config.name.as_str() {
        REDIRECTIONS_PLUGIN => Ok(Box::new(RedirectionsPlugin::new(config.config.clone()))),
        other => Err(StartupError::UnknownPlugin(other.to_string())),
    }
}
