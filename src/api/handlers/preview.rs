use crate::api::handlers::page_response;
use crate::theme::{ThemeConfig, context::KcContext, context::Locale, i18n::Language};
use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

#[derive(Deserialize, Debug, Default)]
pub struct PreviewParams {
    /// Render in this language instead of the context's own.
    lang: Option<String>,
}

/// Render the configured preview context.
#[instrument(skip(config, preview))]
pub async fn preview(
    config: Extension<Arc<ThemeConfig>>,
    preview: Extension<Arc<KcContext>>,
    Query(params): Query<PreviewParams>,
) -> Response {
    let mut context = KcContext::clone(&preview);

    if let Some(tag) = params.lang.as_deref() {
        let Some(language) = Language::parse(tag) else {
            return (StatusCode::BAD_REQUEST, format!("Unsupported language: {tag}"))
                .into_response();
        };
        context.locale.get_or_insert_with(Locale::default).current_language_tag =
            Some(language.as_str().to_string());
    }

    page_response(&context, &config)
}

#[cfg(test)]
mod tests {
    use crate::api::{AppState, router};
    use crate::theme::{ThemeConfig, mock};
    use anyhow::Result;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    async fn get(uri: &str) -> Result<(StatusCode, String)> {
        let app = router(AppState::new(ThemeConfig::default(), mock::login_context()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            assert_eq!(
                response.headers().get(header::CACHE_CONTROL),
                Some(&header::HeaderValue::from_static("no-store"))
            );
        }
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(body.to_vec())?))
    }

    #[tokio::test]
    async fn previews_in_the_context_language() -> Result<()> {
        let (status, body) = get("/").await?;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<html lang=\"en\""));
        assert!(body.contains("Identifier"));
        Ok(())
    }

    #[tokio::test]
    async fn lang_parameter_switches_language() -> Result<()> {
        let (status, body) = get("/?lang=fr").await?;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<html lang=\"fr\""));
        assert!(body.contains("Identifiant"));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_language_is_rejected() -> Result<()> {
        let (status, body) = get("/?lang=de").await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Unsupported language: de");
        Ok(())
    }
}
