//! HTTP surface: the identity server posts a context to `/render` and gets
//! the page back; `/` previews the configured context.

use crate::theme::{ThemeConfig, context::KcContext};
use anyhow::Result;
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    routing::{get, post},
};
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer, services::ServeDir, set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{Span, debug_span, info};
use ulid::Ulid;

pub mod handlers;

use self::handlers::{health, preview, render};

/// Shared state handed to the handlers through `Extension` layers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ThemeConfig>,
    /// Context rendered by the preview endpoint.
    pub preview: Arc<KcContext>,
    /// Served under `/resources` when set.
    pub resources_dir: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ThemeConfig, preview: KcContext) -> Self {
        Self {
            config: Arc::new(config),
            preview: Arc::new(preview),
            resources_dir: None,
        }
    }

    #[must_use]
    pub fn with_resources_dir(mut self, resources_dir: Option<PathBuf>) -> Self {
        self.resources_dir = resources_dir;
        self
    }
}

/// Build the application router with its middleware stack.
#[must_use]
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(preview::preview))
        .route("/render", post(render::render))
        .route("/health", get(health::health).options(health::health));

    if let Some(dir) = &state.resources_dir {
        router = router.nest_service("/resources", ServeDir::new(dir));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestHeaderLayer::if_not_present(
                HeaderName::from_static("x-request-id"),
                |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                "x-request-id",
            )))
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(Extension(state.config))
            .layer(Extension(state.preview)),
    )
}

/// Serve the router on `[::]:port` until Ctrl-C.
/// # Errors
/// Returns an error if the server fails to start
pub async fn new(port: u16, state: AppState) -> Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Gracefully shutdown");
            }
        })
        .await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, ?headers, request_id)
}
