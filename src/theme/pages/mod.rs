//! Rendered pages and the HTML document that delivers them.
//!
//! The view is shipped inside an inert `<template>` and only revealed by the
//! bootstrap script once every stylesheet has settled, so the page never
//! flashes unstyled. A `<noscript>` copy keeps the form usable without
//! JavaScript.

pub mod login;

use crate::theme::assets::{ScriptDescriptor, ScriptTag};
use crate::theme::context::KcContext;
use crate::theme::document::Decorations;
use crate::theme::form::FormId;
use crate::theme::i18n::I18n;
use crate::theme::template::Template;
use crate::theme::{ThemeConfig, ThemeError};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use tracing::debug;

const THEME_CSS: &str = include_str!("../../../assets/theme.css");
const BOOTSTRAP_JS: &str = include_str!("../../../assets/bootstrap.js");

pub const BOOTSTRAP_ID: &str = "kc-bootstrap";
pub const DEFERRED_ID: &str = "kc-deferred";
pub const ROOT_ID: &str = "kc-root";

/// Everything a page needs to be shown.
#[derive(Debug, Clone)]
pub struct Page {
    pub decorations: Decorations,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<ScriptTag>,
    pub view: Markup,
    /// Form whose submit button is disabled after the first submission.
    pub submit_once: Option<FormId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bootstrap<'a> {
    stylesheets: &'a [String],
    scripts: Vec<ScriptDescriptor<'a>>,
    submit_once: Vec<&'static str>,
}

impl Page {
    /// JSON consumed by the bootstrap script, safe to embed in a `<script>`
    /// element.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be serialized.
    pub fn bootstrap_json(&self) -> Result<String, ThemeError> {
        let payload = Bootstrap {
            stylesheets: &self.stylesheets,
            scripts: self.scripts.iter().map(ScriptTag::descriptor).collect(),
            submit_once: self.submit_once.iter().map(|form| form.as_str()).collect(),
        };

        let json = serde_json::to_string(&payload)
            .map_err(|err| ThemeError::Serialization(err.to_string()))?;

        // `<` only ever appears inside JSON strings, where `<` is equivalent.
        Ok(json.replace('<', "\\u003c"))
    }

    /// The complete HTML document.
    ///
    /// # Errors
    /// Returns an error if the bootstrap payload cannot be serialized.
    pub fn to_html(&self) -> Result<String, ThemeError> {
        let bootstrap = self.bootstrap_json()?;
        let decorations = &self.decorations;

        let document = html! {
            (DOCTYPE)
            html lang=[decorations.lang.as_deref()] class=(decorations.html_class) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    meta name="robots" content="noindex, nofollow";
                    title { (decorations.title) }
                    style { (PreEscaped(THEME_CSS)) }
                    noscript {
                        @for href in &self.stylesheets {
                            link rel="stylesheet" href=(href);
                        }
                    }
                    script type="application/json" id=(BOOTSTRAP_ID) { (PreEscaped(bootstrap)) }
                }
                body class=(decorations.body_class) {
                    div id=(ROOT_ID) {}
                    template id=(DEFERRED_ID) { (self.view) }
                    noscript { (self.view) }
                    script { (PreEscaped(BOOTSTRAP_JS)) }
                }
            }
        };

        Ok(document.into_string())
    }
}

/// Render the page the context asks for.
///
/// # Errors
/// Returns [`ThemeError::UnsupportedPage`] for pages this theme does not
/// provide, so the host can fall back to its default theme.
pub fn render_page(context: &KcContext, config: &ThemeConfig) -> Result<Page, ThemeError> {
    let i18n = I18n::from_context(context);
    let template = Template::new(context, i18n, &config.classes);

    debug!(
        page_id = context.page_id.as_str(),
        language = i18n.language().as_str(),
        "rendering page"
    );

    match context.page_id.as_str() {
        login::PAGE_ID => Ok(login::Login::new(template).render()),
        other => Err(ThemeError::UnsupportedPage(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::classes::KcClasses;
    use crate::theme::mock;

    #[test]
    fn document_carries_decorations() -> Result<(), ThemeError> {
        let context = mock::login_context();
        let html = render_page(&context, &ThemeConfig::default())?.to_html()?;

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\" class=\"login-pf\">"));
        assert!(html.contains("<title>Sign in to Survey portal</title>"));
        assert!(html.contains("<template id=\"kc-deferred\">"));
        assert!(html.contains("<div id=\"kc-root\"></div>"));
        Ok(())
    }

    #[test]
    fn missing_language_leaves_lang_out() -> Result<(), ThemeError> {
        let mut context = mock::login_context();
        context.locale = None;

        let html = render_page(&context, &ThemeConfig::default())?.to_html()?;

        assert!(html.contains("<html class=\"login-pf\">"));
        Ok(())
    }

    #[test]
    fn stylesheets_are_listed_for_the_bootstrap_and_noscript() -> Result<(), ThemeError> {
        let context = mock::login_context();
        let page = render_page(&context, &ThemeConfig::default())?;
        let html = page.to_html()?;

        assert_eq!(page.stylesheets.len(), 5);
        for href in &page.stylesheets {
            assert!(html.contains(&format!("<link rel=\"stylesheet\" href=\"{href}\">")));
        }
        Ok(())
    }

    #[test]
    fn bootstrap_payload_cannot_close_its_script() -> Result<(), Box<dyn std::error::Error>> {
        let mut context = mock::login_context();
        context.scripts.push("/js/evil.js?</script><script>alert(1)".to_string());
        let page = render_page(&context, &ThemeConfig::default())?;

        let json = page.bootstrap_json()?;
        assert!(!json.contains("</"));

        let payload: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(payload["submitOnce"][0], "kc-form-login");
        assert_eq!(
            payload["scripts"][2]["src"],
            "/js/evil.js?</script><script>alert(1)"
        );
        Ok(())
    }

    #[test]
    fn no_default_css_means_no_stylesheets() -> Result<(), ThemeError> {
        let context = mock::login_context();
        let config = ThemeConfig::new(KcClasses::new(false));

        let page = render_page(&context, &config)?;

        assert!(page.stylesheets.is_empty());
        assert!(page.to_html()?.contains("<html lang=\"en\" class=\"\">"));
        Ok(())
    }

    #[test]
    fn unsupported_pages_are_rejected() {
        let mut context = mock::login_context();
        context.page_id = "info.ftl".to_string();

        let result = render_page(&context, &ThemeConfig::default());

        assert!(matches!(result, Err(ThemeError::UnsupportedPage(page)) if page == "info.ftl"));
    }
}
