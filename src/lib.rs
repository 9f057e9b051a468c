//! 301 redirect plugin for an axum host application.

pub mod config;
pub mod host;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod plugin;
pub mod redirect;

pub use config::AppConfig;
pub use host::{HostApp, RouteTable};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use plugin::{run, Plugin, PluginError, RedirectionsPlugin};
pub use redirect::{install, parse, ConflictError, InstallError, Redirection, ValidationError};
