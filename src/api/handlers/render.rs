use crate::api::handlers::{error_response, page_response};
use crate::theme::{ThemeConfig, ThemeError, context::KcContext};
use axum::{extract::Extension, response::Response};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Render the page described by the posted context.
///
/// Malformed contexts get `422`, pages this theme does not provide get `404`
/// so the identity server can fall back to its own theme.
#[instrument(skip(config, body))]
pub async fn render(config: Extension<Arc<ThemeConfig>>, body: String) -> Response {
    let context = match KcContext::from_json(&body) {
        Ok(context) => context,
        Err(err) => return error_response(&ThemeError::from(err)),
    };

    debug!(page_id = context.page_id.as_str(), "render request");

    page_response(&context, &config)
}
