//! Route handlers and the page response they share.

pub mod health;
pub mod preview;
pub mod render;

use crate::theme::{ThemeConfig, ThemeError, context::KcContext, pages};
use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

/// HTTP status for a rendering failure.
#[must_use]
pub const fn status_for(err: &ThemeError) -> StatusCode {
    match err {
        ThemeError::UnsupportedPage(_) => StatusCode::NOT_FOUND,
        ThemeError::InvalidContext(_) | ThemeError::InvalidClasses(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ThemeError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(err: &ThemeError) -> Response {
    let status = status_for(err);
    if status.is_server_error() {
        error!("Failed to render page: {}", err);
    } else {
        warn!("Rejected render request: {}", err);
    }

    (status, err.to_string()).into_response()
}

/// Render `context` as a complete, uncacheable HTML document.
pub(crate) fn page_response(context: &KcContext, config: &ThemeConfig) -> Response {
    match pages::render_page(context, config).and_then(|page| page.to_html()) {
        Ok(html) => ([(header::CACHE_CONTROL, "no-store")], Html(html)).into_response(),
        Err(err) => error_response(&err),
    }
}
