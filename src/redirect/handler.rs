//! 301 redirect handler.

use std::sync::Arc;

use axum::{
    http::{header, header::InvalidHeaderValue, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
};

use crate::redirect::model::Redirection;

/// Status code every redirect answers with.
pub const REDIRECT_STATUS: StatusCode = StatusCode::MOVED_PERMANENTLY;

/// Handler bound to one redirection's source path.
#[derive(Debug, Clone)]
pub struct RedirectResponder {
    source: Arc<str>,
    location: HeaderValue,
}

impl RedirectResponder {
    /// Fails if the destination cannot be sent as a `Location` header.
    pub fn new(redirection: &Redirection) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            source: Arc::from(redirection.source()),
            location: HeaderValue::from_str(redirection.destination())?,
        })
    }

    /// Build the redirect response: 301, `Location`, empty body.
    pub fn respond(&self) -> Response {
        metrics::counter!("redirects_served_total", "source" => self.source.to_string())
            .increment(1);
        tracing::debug!(source = %self.source, location = ?self.location, "Redirecting");

        (REDIRECT_STATUS, [(header::LOCATION, self.location.clone())]).into_response()
    }

    /// Wrap into an axum method router answering GET (and HEAD).
    pub fn into_method_router(self) -> MethodRouter {
        get(move || {
            let responder = self.clone();
            async move { responder.respond() }
        })
    }
}
